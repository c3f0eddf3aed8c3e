use crate::models::{MatchFilters, RoommateProfile};

/// Check if a candidate passes the filter panel
///
/// Filters run before ranking and never touch the score. Missing budget
/// bounds fall back to the permissive defaults, so a profile without a
/// budget passes every budget filter.
#[inline]
pub fn matches_filters(profile: &RoommateProfile, filters: &MatchFilters) -> bool {
    if !matches_text(&profile.university, &filters.university) {
        return false;
    }

    if !matches_text(&profile.location, &filters.location) {
        return false;
    }

    let budget = profile.budget();

    // Candidate must be willing to pay no more than the ceiling at the low end
    if let Some(max_budget) = filters.max_budget {
        if budget.min > max_budget {
            return false;
        }
    }

    if let Some(min_budget) = filters.min_budget {
        if budget.max < min_budget {
            return false;
        }
    }

    true
}

/// Case-insensitive equality, skipped when the filter is unset or blank
#[inline]
fn matches_text(value: &Option<String>, wanted: &Option<String>) -> bool {
    match wanted.as_deref().map(str::trim) {
        None | Some("") => true,
        Some(wanted) => value
            .as_deref()
            .is_some_and(|value| value.trim().eq_ignore_ascii_case(wanted)),
    }
}
