use actix_web::{http::StatusCode, web, HttpResponse, Responder};
use validator::Validate;

use crate::models::{FindMatchesRequest, FindMatchesResponse, HealthResponse};
use crate::routes::{cached_candidates, cached_profile, error_response, store_error_response, AppState};

/// Configure all match-related routes backed by the profile store
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/health", web::get().to(health_check))
        .route("/matches/find", web::post().to(find_matches));
}

/// Health check endpoint
async fn health_check(state: web::Data<AppState>) -> impl Responder {
    let db_healthy = state.store.health_check().await.unwrap_or(false);

    let status = if db_healthy { "healthy" } else { "degraded" };

    HttpResponse::Ok().json(HealthResponse {
        status: status.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

/// Find matches endpoint
///
/// POST /api/v1/matches/find
///
/// Request body:
/// ```json
/// {
///   "userId": "string",
///   "limit": 20,
///   "filters": { "university": "string", "maxBudget": 2500, "minScore": 40 }
/// }
/// ```
async fn find_matches(
    state: web::Data<AppState>,
    req: web::Json<FindMatchesRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for find_matches request: {:?}", errors);
        return error_response(StatusCode::BAD_REQUEST, "Validation failed", errors);
    }

    let user_id = &req.user_id;
    let limit = req
        .limit
        .map(usize::from)
        .unwrap_or(state.default_limit)
        .min(state.matcher.max_limit());

    tracing::info!("Finding roommates for user: {}, limit: {}", user_id, limit);

    let current = match cached_profile(&state, user_id).await {
        Ok(profile) => profile,
        Err(e) => return store_error_response("Failed to fetch user profile", &e),
    };

    let candidates = match cached_candidates(&state, user_id).await {
        Ok(candidates) => candidates,
        Err(e) => return store_error_response("Failed to query candidates", &e),
    };

    tracing::debug!("Found {} candidates for {}", candidates.len(), user_id);

    let result = state
        .matcher
        .find_matches(&current, candidates, &req.filters, limit);

    tracing::info!(
        "Returning {} matches for user {} (from {} candidates)",
        result.matches.len(),
        user_id,
        result.total_candidates
    );

    HttpResponse::Ok().json(FindMatchesResponse {
        matches: result.matches,
        total_candidates: result.total_candidates,
    })
}
