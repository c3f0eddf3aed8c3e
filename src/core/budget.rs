use crate::models::BudgetRange;

/// Maximum points awarded for budget compatibility
pub const BUDGET_POINTS: u8 = 10;

/// Size of the intersection of two budget ranges, or `None` when they are disjoint
///
/// Ranges that merely touch (`[1000, 2000]` and `[2000, 3000]`) overlap with size zero.
#[inline]
pub fn budget_overlap(a: &BudgetRange, b: &BudgetRange) -> Option<f64> {
    let start = a.min.max(b.min);
    let end = a.max.min(b.max);

    if end < start {
        None
    } else {
        Some(end - start)
    }
}

/// Mean width of the two ranges
#[inline]
pub fn average_range_size(a: &BudgetRange, b: &BudgetRange) -> f64 {
    ((a.max - a.min) + (b.max - b.min)) / 2.0
}

/// Calculate budget points (0-10) and the raw overlap in MAD
///
/// points = round(10 * overlap / average range size), clamped to [0, 10].
/// Two zero-width budgets at the same amount are a full match.
pub fn calculate_budget_points(a: &BudgetRange, b: &BudgetRange) -> (u8, f64) {
    let Some(overlap) = budget_overlap(a, b) else {
        return (0, 0.0);
    };

    let average = average_range_size(a, b);
    if average <= 0.0 {
        return (BUDGET_POINTS, overlap);
    }

    let max = f64::from(BUDGET_POINTS);
    let points = (max * overlap / average).round().clamp(0.0, max);

    // NaN saturates to 0 on cast
    (points as u8, overlap)
}
