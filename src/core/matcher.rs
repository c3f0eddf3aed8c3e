use crate::core::{compatibility::calculate_compatibility, filters::matches_filters};
use crate::models::{MatchFilters, RankedMatch, RoommateProfile};

/// Result of the find-matches pipeline
#[derive(Debug)]
pub struct FindResult {
    pub matches: Vec<RankedMatch>,
    pub total_candidates: usize,
}

/// Score every candidate against `current` and sort by score, highest first
///
/// No candidate is dropped: a copy of `current` in the list is kept and
/// scores 0. The sort is stable, so tied candidates keep their input order.
pub fn rank_matches(
    current: &RoommateProfile,
    candidates: Vec<RoommateProfile>,
) -> Vec<RankedMatch> {
    let mut ranked: Vec<RankedMatch> = candidates
        .into_iter()
        .map(|profile| {
            let match_score = calculate_compatibility(Some(current), Some(&profile));
            RankedMatch { profile, match_score }
        })
        .collect();

    ranked.sort_by(|a, b| b.match_score.score.cmp(&a.match_score.score));

    ranked
}

/// Matching orchestrator used by the service
///
/// # Pipeline Stages
/// 1. Drop the requesting user from the candidate pool
/// 2. Filter panel (university, location, budget)
/// 3. Score and rank
/// 4. Minimum score and limit
#[derive(Debug, Clone)]
pub struct Matcher {
    max_limit: usize,
}

impl Matcher {
    pub fn new(max_limit: usize) -> Self {
        Self {
            max_limit: max_limit.max(1),
        }
    }

    pub fn max_limit(&self) -> usize {
        self.max_limit
    }

    /// Find the best roommates for `current` among stored candidates
    ///
    /// # Arguments
    /// * `current` - The requesting student's profile
    /// * `candidates` - Candidate pool fetched from the profile store
    /// * `filters` - Filter panel selections
    /// * `limit` - Maximum number of matches to return (capped at `max_limit`)
    pub fn find_matches(
        &self,
        current: &RoommateProfile,
        candidates: Vec<RoommateProfile>,
        filters: &MatchFilters,
        limit: usize,
    ) -> FindResult {
        let total_candidates = candidates.len();

        let eligible: Vec<RoommateProfile> = candidates
            .into_iter()
            .filter(|profile| profile.user_id != current.user_id)
            .filter(|profile| matches_filters(profile, filters))
            .collect();

        tracing::trace!(
            "{} of {} candidates passed filters for {}",
            eligible.len(),
            total_candidates,
            current.user_id
        );

        let mut matches = rank_matches(current, eligible);

        if let Some(min_score) = filters.min_score {
            matches.retain(|m| m.match_score.score >= min_score);
        }

        matches.truncate(limit.min(self.max_limit));

        FindResult {
            matches,
            total_candidates,
        }
    }
}

impl Default for Matcher {
    fn default() -> Self {
        Self::new(100)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{SleepSchedule, SmokingPreference};

    fn create_candidate(id: &str, university: &str, cleanliness: u8) -> RoommateProfile {
        RoommateProfile {
            university: Some(university.to_string()),
            location: Some("Rabat".to_string()),
            cleanliness_level: Some(cleanliness),
            sleep_schedule: Some(SleepSchedule::Early),
            smoking_preference: Some(SmokingPreference::NoSmoking),
            budget_min: Some(1000.0),
            budget_max: Some(2000.0),
            ..RoommateProfile::new(id)
        }
    }

    #[test]
    fn test_rank_empty() {
        let current = create_candidate("me", "UM5", 3);
        assert!(rank_matches(&current, vec![]).is_empty());
    }

    #[test]
    fn test_rank_sorted_descending() {
        let current = create_candidate("me", "UM5", 3);
        let candidates = vec![
            create_candidate("far", "UIR", 5),
            create_candidate("close", "UM5", 3),
            create_candidate("mid", "UM5", 5),
        ];

        let ranked = rank_matches(&current, candidates);

        assert_eq!(ranked.len(), 3);
        assert_eq!(ranked[0].profile.user_id, "close");
        assert_eq!(ranked[1].profile.user_id, "mid");
        assert_eq!(ranked[2].profile.user_id, "far");
    }

    #[test]
    fn test_rank_keeps_self_with_zero_score() {
        let current = create_candidate("me", "UM5", 3);
        let ranked = rank_matches(&current, vec![current.clone(), create_candidate("other", "UIR", 1)]);

        assert_eq!(ranked.len(), 2);
        assert_eq!(ranked[1].profile.user_id, "me");
        assert_eq!(ranked[1].match_score.score, 0);
        assert!(ranked[1].match_score.is_empty());
    }

    #[test]
    fn test_ties_keep_input_order() {
        let current = create_candidate("me", "UM5", 3);
        let candidates = vec![
            create_candidate("x", "UM5", 3),
            create_candidate("y", "UIR", 1),
            create_candidate("z", "UM5", 3),
        ];

        let ranked = rank_matches(&current, candidates);
        let order: Vec<&str> = ranked.iter().map(|m| m.profile.user_id.as_str()).collect();

        assert_eq!(order, vec!["x", "z", "y"]);
    }

    #[test]
    fn test_find_matches_excludes_self_and_filters() {
        let matcher = Matcher::default();
        let current = create_candidate("me", "UM5", 3);
        let candidates = vec![
            current.clone(),
            create_candidate("1", "UM5", 3),
            create_candidate("2", "UIR", 3),
        ];
        let filters = MatchFilters {
            university: Some("UM5".to_string()),
            ..MatchFilters::default()
        };

        let result = matcher.find_matches(&current, candidates, &filters, 10);

        assert_eq!(result.total_candidates, 3);
        assert_eq!(result.matches.len(), 1);
        assert_eq!(result.matches[0].profile.user_id, "1");
    }

    #[test]
    fn test_find_matches_min_score_and_limit() {
        let matcher = Matcher::new(2);
        let current = create_candidate("me", "UM5", 3);
        let candidates: Vec<RoommateProfile> = (0..5)
            .map(|i| create_candidate(&i.to_string(), "UM5", 3))
            .chain(std::iter::once(create_candidate("low", "UIR", 1)))
            .collect();
        let filters = MatchFilters {
            min_score: Some(80),
            ..MatchFilters::default()
        };

        let result = matcher.find_matches(&current, candidates.clone(), &filters, 10);

        assert_eq!(result.matches.len(), 2);
        assert!(result.matches.iter().all(|m| m.match_score.score >= 80));

        let unlimited = Matcher::default().find_matches(&current, candidates, &filters, 10);
        assert_eq!(unlimited.matches.len(), 5);
        assert!(unlimited.matches.iter().all(|m| m.profile.user_id != "low"));
    }
}
