//! Health check and service info endpoints.

use actix_web::{HttpResponse, get, web};
use chrono::Utc;
use serde::Serialize;
use utoipa::ToSchema;

use crate::error::AppResult;
use crate::store::{SharedRegistry, StoreCounts};

/// Health check response.
#[derive(Serialize, ToSchema)]
pub struct HealthResponse {
    status: &'static str,
    timestamp: String,
    records: StoreCounts,
}

/// Endpoints grouped by resource, as listed by the root endpoint.
#[derive(Serialize, ToSchema)]
pub struct EndpointsByCategory {
    users: Vec<&'static str>,
    images: Vec<&'static str>,
    models: Vec<&'static str>,
    assessments: Vec<&'static str>,
    quality_metrics: Vec<&'static str>,
}

/// Root endpoint response.
#[derive(Serialize, ToSchema)]
pub struct ServerInfoResponse {
    message: &'static str,
    version: &'static str,
    total_endpoints: usize,
    documentation: &'static str,
    endpoints_by_category: EndpointsByCategory,
}

fn endpoints_by_category() -> EndpointsByCategory {
    EndpointsByCategory {
        users: vec![
            "GET /api/v1/users",
            "GET /api/v1/users/{id}",
            "POST /api/v1/users",
            "PUT /api/v1/users/{id}",
            "DELETE /api/v1/users/{id}",
        ],
        images: vec![
            "GET /api/v1/images",
            "GET /api/v1/images/{id}",
            "POST /api/v1/images",
            "PUT /api/v1/images/{id}",
            "DELETE /api/v1/images/{id}",
        ],
        models: vec![
            "GET /api/v1/models",
            "GET /api/v1/models/{id}",
            "POST /api/v1/models",
            "PUT /api/v1/models/{id}",
            "DELETE /api/v1/models/{id}",
        ],
        assessments: vec![
            "GET /api/v1/assessments",
            "GET /api/v1/assessments/{id}",
            "POST /api/v1/assessments",
            "PUT /api/v1/assessments/{id}",
            "DELETE /api/v1/assessments/{id}",
            "GET /api/v1/images/{id}/assessments",
        ],
        quality_metrics: vec![
            "GET /api/v1/quality-metrics",
            "GET /api/v1/quality-metrics/{id}",
            "GET /api/v1/assessments/{id}/quality-metrics",
        ],
    }
}

/// Service info endpoint.
///
/// Lists the resource endpoints and where the API documentation lives.
#[utoipa::path(
    get,
    path = "/",
    tag = "Health",
    responses(
        (status = 200, description = "Service capabilities", body = ServerInfoResponse)
    )
)]
#[get("/")]
pub async fn info() -> HttpResponse {
    let endpoints = endpoints_by_category();
    let total_endpoints = endpoints.users.len()
        + endpoints.images.len()
        + endpoints.models.len()
        + endpoints.assessments.len()
        + endpoints.quality_metrics.len();

    HttpResponse::Ok().json(ServerInfoResponse {
        message: "GSD Assessment API",
        version: env!("CARGO_PKG_VERSION"),
        total_endpoints,
        documentation: "/docs/",
        endpoints_by_category: endpoints,
    })
}

/// Health check endpoint.
///
/// Returns 200 with the live record count of every store.
#[utoipa::path(
    get,
    path = "/api/v1/health",
    tag = "Health",
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse)
    )
)]
#[get("/health")]
pub async fn health(registry: web::Data<SharedRegistry>) -> AppResult<HttpResponse> {
    let records = registry.lock()?.counts();

    Ok(HttpResponse::Ok().json(HealthResponse {
        status: "healthy",
        timestamp: Utc::now().to_rfc3339(),
        records,
    }))
}

/// Configure health routes (mounted under `/api/v1`).
pub fn configure_health_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(health);
}

/// Configure the root info route (mounted at the application root).
pub fn configure_root_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(info);
}
