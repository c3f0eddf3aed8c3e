use actix_web::{http::StatusCode, web, HttpResponse, Responder};
use validator::Validate;

use crate::models::{RoommateProfile, UpsertProfileResponse};
use crate::routes::{cached_profile, error_response, invalidate_profile, store_error_response, AppState};

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/profiles", web::put().to(upsert_profile))
        .route("/profiles/{user_id}", web::get().to(get_profile))
        .route("/profiles/{user_id}", web::delete().to(delete_profile));
}

/// PUT /api/v1/profiles
async fn upsert_profile(
    state: web::Data<AppState>,
    req: web::Json<RoommateProfile>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        return error_response(StatusCode::BAD_REQUEST, "Validation failed", errors);
    }

    if let Err(e) = state.store.upsert_profile(&req).await {
        return store_error_response("Failed to save profile", &e);
    }

    invalidate_profile(&state, &req.user_id).await;

    tracing::info!("Saved roommate profile for {}", req.user_id);

    HttpResponse::Ok().json(UpsertProfileResponse {
        success: true,
        user_id: req.user_id.clone(),
    })
}

/// GET /api/v1/profiles/{user_id}
async fn get_profile(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> impl Responder {
    match cached_profile(&state, &path).await {
        Ok(profile) => HttpResponse::Ok().json(profile),
        Err(e) => store_error_response("Failed to fetch profile", &e),
    }
}

/// DELETE /api/v1/profiles/{user_id}
async fn delete_profile(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> impl Responder {
    let user_id = path.into_inner();

    match state.store.delete_profile(&user_id).await {
        Ok(true) => {
            invalidate_profile(&state, &user_id).await;
            tracing::info!("Deleted roommate profile for {}", user_id);
            HttpResponse::NoContent().finish()
        }
        Ok(false) => error_response(
            StatusCode::NOT_FOUND,
            "Profile not found",
            format!("Profile not found for user {}", user_id),
        ),
        Err(e) => store_error_response("Failed to delete profile", &e),
    }
}
