// Route exports
pub mod compatibility;
pub mod matches;
pub mod profiles;

use actix_web::{error, http::StatusCode, web, HttpResponse};
use std::sync::Arc;

use crate::core::Matcher;
use crate::models::{ErrorResponse, RoommateProfile};
use crate::services::{CacheError, CacheKey, CacheManager, ProfileStore, StoreError};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<ProfileStore>,
    pub cache: Arc<CacheManager>,
    pub matcher: Matcher,
    pub default_limit: usize,
    pub candidate_pool_size: usize,
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1")
            .configure(compatibility::configure)
            .configure(matches::configure)
            .configure(profiles::configure),
    );
}

/// Error for rejected request payloads, rendered as an `ErrorResponse` body
#[derive(Debug)]
pub struct ApiError {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.error, self.message)
    }
}

impl std::error::Error for ApiError {}

impl error::ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        StatusCode::from_u16(self.status_code).unwrap_or(StatusCode::BAD_REQUEST)
    }

    fn error_response(&self) -> HttpResponse {
        error_response(self.status_code(), &self.error, &self.message)
    }
}

/// Handle JSON payload errors
pub fn handle_json_payload_error(err: error::JsonPayloadError, req: &actix_web::HttpRequest) -> actix_web::Error {
    tracing::info!("JSON payload error on {}: {}", req.path(), err);
    ApiError {
        error: "invalid_json".to_string(),
        message: format!("Invalid JSON: {}", err),
        status_code: 400,
    }
    .into()
}

/// Build an `ErrorResponse` body with the given status
pub(crate) fn error_response(status: StatusCode, error: &str, message: impl ToString) -> HttpResponse {
    HttpResponse::build(status).json(ErrorResponse {
        error: error.to_string(),
        message: message.to_string(),
        status_code: status.as_u16(),
    })
}

/// Map store failures onto 404/500 responses
pub(crate) fn store_error_response(context: &str, err: &StoreError) -> HttpResponse {
    match err {
        StoreError::NotFound(message) => error_response(StatusCode::NOT_FOUND, "Profile not found", message),
        other => {
            tracing::error!("{}: {}", context, other);
            error_response(StatusCode::INTERNAL_SERVER_ERROR, context, other)
        }
    }
}

/// Load a profile through the cache
///
/// Cache failures are logged and bypassed; the store stays authoritative.
pub(crate) async fn cached_profile(state: &AppState, user_id: &str) -> Result<RoommateProfile, StoreError> {
    let key = CacheKey::profile(user_id);
    match state.cache.get::<RoommateProfile>(&key).await {
        Ok(profile) => return Ok(profile),
        Err(CacheError::CacheMiss(_)) => {}
        Err(e) => tracing::warn!("Cache read failed for {}: {}", key, e),
    }

    let profile = state.store.get_profile(user_id).await?;
    if let Err(e) = state.cache.set(&key, &profile).await {
        tracing::warn!("Cache write failed for {}: {}", key, e);
    }

    Ok(profile)
}

/// Load the candidate pool for a user through the cache
pub(crate) async fn cached_candidates(state: &AppState, user_id: &str) -> Result<Vec<RoommateProfile>, StoreError> {
    let key = CacheKey::candidates(user_id);
    match state.cache.get::<Vec<RoommateProfile>>(&key).await {
        Ok(candidates) => return Ok(candidates),
        Err(CacheError::CacheMiss(_)) => {}
        Err(e) => tracing::warn!("Cache read failed for {}: {}", key, e),
    }

    let candidates = state
        .store
        .list_candidates(user_id, state.candidate_pool_size)
        .await?;
    if let Err(e) = state.cache.set(&key, &candidates).await {
        tracing::warn!("Cache write failed for {}: {}", key, e);
    }

    Ok(candidates)
}

/// Drop cached state affected by a profile write
pub(crate) async fn invalidate_profile(state: &AppState, user_id: &str) {
    if let Err(e) = state.cache.delete(&CacheKey::profile(user_id)).await {
        tracing::warn!("Failed to invalidate profile cache for {}: {}", user_id, e);
    }
    if let Err(e) = state.cache.invalidate_pattern(CacheKey::all_candidates()).await {
        tracing::warn!("Failed to invalidate candidate pools: {}", e);
    }
}
