use serde::{Deserialize, Serialize};
use validator::Validate;
use crate::models::domain::{MatchFilters, RoommateProfile};

/// Request to score a pair of profiles
///
/// Either side may be missing; the scorer answers with the zero sentinel.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScoreRequest {
    #[serde(alias = "profile_a", rename = "profileA", default)]
    pub profile_a: Option<RoommateProfile>,
    #[serde(alias = "profile_b", rename = "profileB", default)]
    pub profile_b: Option<RoommateProfile>,
}

/// Request to rank caller-supplied candidates against a profile
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankRequest {
    #[serde(alias = "current_profile", rename = "currentProfile")]
    pub current_profile: RoommateProfile,
    #[serde(default)]
    pub candidates: Vec<RoommateProfile>,
}

/// Request to find matches among stored profiles
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct FindMatchesRequest {
    #[validate(length(min = 1))]
    #[serde(alias = "user_id", rename = "userId")]
    pub user_id: String,
    /// Falls back to the configured default when absent
    #[validate(range(min = 1, max = 100))]
    #[serde(default)]
    pub limit: Option<u16>,
    #[serde(default)]
    pub filters: MatchFilters,
}
