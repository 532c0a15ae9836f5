use actix_web::{web, HttpResponse, Responder};
use std::sync::Arc;
use validator::Validate;

use crate::core::ProximityFilter;
use crate::models::{
    CaseListQuery, CaseListResponse, ErrorResponse, HealthResponse, NearbyCase, NearbyQuery,
    NearbyResponse,
};
use crate::services::CaseSource;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub source: Arc<CaseSource>,
    pub filter: ProximityFilter,
}

/// Configure all case-related routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/health", web::get().to(health_check))
        .route("/missing-persons", web::get().to(list_cases))
        .route("/missing-persons/nearby", web::get().to(nearby_cases))
        .route("/missing-persons/nearby/", web::get().to(nearby_cases));
}

fn bad_request(error: &str, message: String) -> HttpResponse {
    HttpResponse::BadRequest().json(ErrorResponse {
        error: error.to_string(),
        message,
        status_code: 400,
    })
}

fn source_unavailable(message: String) -> HttpResponse {
    HttpResponse::BadGateway().json(ErrorResponse {
        error: "Failed to fetch cases".to_string(),
        message,
        status_code: 502,
    })
}

/// Health check endpoint
async fn health_check(state: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        source: state.source.kind().to_string(),
        timestamp: chrono::Utc::now(),
    })
}

/// List cases, optionally by status
///
/// GET /api/v1/missing-persons?status=Open
async fn list_cases(
    state: web::Data<AppState>,
    query: web::Query<CaseListQuery>,
) -> impl Responder {
    let cases = match state.source.fetch_cases().await {
        Ok(cases) => cases,
        Err(e) => {
            tracing::error!("Failed to fetch cases: {}", e);
            return source_unavailable(e.to_string());
        }
    };

    let cases: Vec<_> = cases
        .iter()
        .filter(|c| query.status.map_or(true, |status| c.status == status))
        .cloned()
        .collect();

    HttpResponse::Ok().json(CaseListResponse {
        total: cases.len(),
        cases,
    })
}

/// Cases around a point
///
/// GET /api/v1/missing-persons/nearby?latitude=28.6139&longitude=77.2090&radius=10
///
/// `radius` is in kilometers and falls back to the configured default.
/// Matches keep the order the source returned them in.
async fn nearby_cases(
    state: web::Data<AppState>,
    query: web::Query<NearbyQuery>,
) -> impl Responder {
    if let Err(errors) = query.validate() {
        tracing::info!("Validation failed for nearby request: {:?}", errors);
        return bad_request("Validation failed", errors.to_string());
    }

    let center = match query.center() {
        Ok(center) => center,
        Err(e) => return bad_request("Invalid coordinates", e.to_string()),
    };

    let cases = match state.source.fetch_cases().await {
        Ok(cases) => cases,
        Err(e) => {
            tracing::error!("Failed to fetch cases for nearby search: {}", e);
            return source_unavailable(e.to_string());
        }
    };

    let result = match state.filter.search(cases.as_slice(), center, query.radius) {
        Ok(result) => result,
        Err(e) => return bad_request("Invalid radius", e.to_string()),
    };

    let response = NearbyResponse {
        center,
        radius_km: result.radius_km,
        matches: result
            .matches
            .into_iter()
            .map(|hit| NearbyCase {
                case: hit.entity.clone(),
                distance_km: hit.distance_km,
            })
            .collect(),
        total_candidates: result.total_candidates,
    };

    tracing::info!(
        "Returning {} nearby cases within {} km of ({}, {}) (from {} candidates)",
        response.matches.len(),
        response.radius_km,
        center.latitude(),
        center.longitude(),
        response.total_candidates
    );

    HttpResponse::Ok().json(response)
}
