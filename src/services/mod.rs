// Service exports
pub mod cache;
pub mod postgres;

pub use cache::{CacheManager, CacheKey, CacheError};
pub use postgres::{ProfileStore, StoreError};
