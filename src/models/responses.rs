use serde::{Deserialize, Serialize};

use crate::models::domain::{MissingPerson, NearbyCase};
use crate::models::geo::GeoPoint;

/// Response for the nearby cases endpoint
#[derive(Debug, Clone, Serialize)]
pub struct NearbyResponse {
    pub center: GeoPoint,
    pub radius_km: f64,
    pub matches: Vec<NearbyCase>,
    pub total_candidates: usize,
}

/// Response for the case listing endpoint
#[derive(Debug, Clone, Serialize)]
pub struct CaseListResponse {
    pub cases: Vec<MissingPerson>,
    pub total: usize,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub source: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}
