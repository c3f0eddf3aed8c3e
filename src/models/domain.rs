use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde::ser::SerializeMap;
use validator::Validate;

use crate::models::categories::{
    lenient, Personality, PetsTolerance, SleepSchedule, SmokingPreference, SocialLevel,
};

/// Lower budget bound assumed when a profile does not state one (MAD)
pub const DEFAULT_BUDGET_MIN: f64 = 0.0;

/// Upper budget bound assumed when a profile does not state one (MAD)
pub const DEFAULT_BUDGET_MAX: f64 = 10_000.0;

/// A student's roommate-search record
///
/// Every lifestyle field is optional. Missing values are treated as neutral
/// by the scorer, never as a reason to exclude a candidate.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
pub struct RoommateProfile {
    #[validate(length(min = 1))]
    #[serde(rename = "userId")]
    pub user_id: String,
    #[serde(default)]
    pub university: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[validate(range(min = 1, max = 5))]
    #[serde(rename = "cleanlinessLevel", default)]
    pub cleanliness_level: Option<u8>,
    #[serde(rename = "sleepSchedule", default, deserialize_with = "lenient")]
    pub sleep_schedule: Option<SleepSchedule>,
    #[serde(default, deserialize_with = "lenient")]
    pub personality: Option<Personality>,
    #[serde(rename = "socialLevel", default, deserialize_with = "lenient")]
    pub social_level: Option<SocialLevel>,
    #[serde(rename = "smokingPreference", default, deserialize_with = "lenient")]
    pub smoking_preference: Option<SmokingPreference>,
    #[serde(rename = "petsTolerance", default, deserialize_with = "lenient")]
    pub pets_tolerance: Option<PetsTolerance>,
    #[validate(range(min = 0.0))]
    #[serde(rename = "budgetMin", default)]
    pub budget_min: Option<f64>,
    #[validate(range(min = 0.0))]
    #[serde(rename = "budgetMax", default)]
    pub budget_max: Option<f64>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub interests: Vec<String>,
    #[serde(default)]
    pub bio: Option<String>,
}

impl RoommateProfile {
    /// Create an otherwise empty profile for the given user
    pub fn new(user_id: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            ..Self::default()
        }
    }

    /// Budget range with permissive defaults filled in
    pub fn budget(&self) -> BudgetRange {
        BudgetRange {
            min: self.budget_min.unwrap_or(DEFAULT_BUDGET_MIN),
            max: self.budget_max.unwrap_or(DEFAULT_BUDGET_MAX),
        }
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<String>>::deserialize(deserializer)?.unwrap_or_default())
}

/// Monthly rent budget in MAD
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BudgetRange {
    pub min: f64,
    pub max: f64,
}

/// Points awarded per criterion; sums to the raw (unclamped) score
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreBreakdown {
    pub university: u8,
    pub location: u8,
    pub cleanliness: u8,
    pub sleep_schedule: u8,
    pub personality: u8,
    pub social_level: u8,
    pub smoking: u8,
    pub pets: u8,
    pub budget: u8,
    pub interests: u8,
}

impl ScoreBreakdown {
    pub fn total(&self) -> u16 {
        [
            self.university,
            self.location,
            self.cleanliness,
            self.sleep_schedule,
            self.personality,
            self.social_level,
            self.smoking,
            self.pets,
            self.budget,
            self.interests,
        ]
        .iter()
        .map(|&points| u16::from(points))
        .sum()
    }
}

/// Per-criterion outcome, used by callers for badges
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchDetails {
    pub same_university: bool,
    pub same_location: bool,
    pub cleanliness_diff: Option<u8>,
    pub same_sleep_schedule: bool,
    pub same_personality: bool,
    pub same_social_level: bool,
    pub same_smoking: bool,
    pub same_pets: bool,
    pub budget_overlap: f64,
    pub common_interests: usize,
    pub breakdown: ScoreBreakdown,
}

/// Compatibility between two profiles
///
/// `details` is `None` for the zero-score sentinel (absent profile or
/// self-match) and serializes as an empty object.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatchScore {
    pub score: u8,
    #[serde(serialize_with = "details_or_empty")]
    pub details: Option<MatchDetails>,
}

impl MatchScore {
    /// The zero score returned for absent or identical profiles
    pub fn empty() -> Self {
        Self {
            score: 0,
            details: None,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.details.is_none()
    }
}

fn details_or_empty<S>(details: &Option<MatchDetails>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match details {
        Some(details) => details.serialize(serializer),
        None => serializer.serialize_map(Some(0))?.end(),
    }
}

/// A candidate paired with its score against the current profile
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedMatch {
    pub profile: RoommateProfile,
    #[serde(rename = "matchScore")]
    pub match_score: MatchScore,
}

/// Filter panel applied by the service before ranking
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MatchFilters {
    #[serde(default)]
    pub university: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(rename = "minBudget", default)]
    pub min_budget: Option<f64>,
    #[serde(rename = "maxBudget", default)]
    pub max_budget: Option<f64>,
    #[serde(rename = "minScore", default)]
    pub min_score: Option<u8>,
}
