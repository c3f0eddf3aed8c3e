//! Roommate Match - compatibility matching service for RoastMyDorm
//!
//! This library provides the roommate compatibility engine: a pure scorer
//! comparing two student profiles on ten weighted criteria, and a ranker that
//! orders candidates by that score. The HTTP service, profile store and cache
//! are thin layers around it.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use crate::core::{calculate_compatibility, rank_matches, Matcher};
pub use crate::models::{RoommateProfile, MatchScore, MatchDetails, RankedMatch, MatchFilters};
