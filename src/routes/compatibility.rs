use actix_web::{web, HttpResponse, Responder};

use crate::core::{calculate_compatibility, rank_matches};
use crate::models::{RankRequest, RankResponse, ScoreRequest};

/// Stateless engine routes; the caller supplies every profile
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/compatibility/score", web::post().to(score_pair))
        .route("/matches/rank", web::post().to(rank_candidates));
}

/// Score two profiles
///
/// POST /api/v1/compatibility/score
///
/// Request body:
/// ```json
/// { "profileA": { "userId": "a", ... }, "profileB": { "userId": "b", ... } }
/// ```
async fn score_pair(req: web::Json<ScoreRequest>) -> impl Responder {
    let ScoreRequest { profile_a, profile_b } = req.into_inner();
    let result = calculate_compatibility(profile_a.as_ref(), profile_b.as_ref());

    HttpResponse::Ok().json(result)
}

/// Rank caller-supplied candidates
///
/// POST /api/v1/matches/rank
///
/// Request body:
/// ```json
/// { "currentProfile": { "userId": "me", ... }, "candidates": [ ... ] }
/// ```
async fn rank_candidates(req: web::Json<RankRequest>) -> impl Responder {
    let RankRequest { current_profile, candidates } = req.into_inner();

    tracing::debug!(
        "Ranking {} candidates for {}",
        candidates.len(),
        current_profile.user_id
    );

    let matches = rank_matches(&current_profile, candidates);

    HttpResponse::Ok().json(RankResponse { matches })
}
