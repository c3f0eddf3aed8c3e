// Model exports
pub mod categories;
pub mod domain;
pub mod requests;
pub mod responses;

pub use categories::{Personality, PetsTolerance, SleepSchedule, SmokingPreference, SocialLevel, UnknownLabel};
pub use domain::{RoommateProfile, BudgetRange, MatchScore, MatchDetails, ScoreBreakdown, RankedMatch, MatchFilters, DEFAULT_BUDGET_MIN, DEFAULT_BUDGET_MAX};
pub use requests::{ScoreRequest, RankRequest, FindMatchesRequest};
pub use responses::{FindMatchesResponse, RankResponse, HealthResponse, ErrorResponse, UpsertProfileResponse};
