use serde::{Deserialize, Serialize};
use crate::models::domain::RankedMatch;

/// Response for find matches endpoint
#[derive(Debug, Clone, Serialize)]
pub struct FindMatchesResponse {
    pub matches: Vec<RankedMatch>,
    #[serde(rename = "totalCandidates")]
    pub total_candidates: usize,
}

/// Response for the rank endpoint
#[derive(Debug, Clone, Serialize)]
pub struct RankResponse {
    pub matches: Vec<RankedMatch>,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    #[serde(rename = "statusCode")]
    pub status_code: u16,
}

/// Profile upsert response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpsertProfileResponse {
    pub success: bool,
    #[serde(rename = "userId")]
    pub user_id: String,
}
