// Core algorithm exports
pub mod budget;
pub mod compatibility;
pub mod filters;
pub mod matcher;

pub use budget::{budget_overlap, average_range_size, calculate_budget_points};
pub use compatibility::{calculate_compatibility, MAX_SCORE};
pub use filters::matches_filters;
pub use matcher::{rank_matches, Matcher, FindResult};
