//! Read-only quality metrics endpoints.

use actix_web::{HttpResponse, get, web};

use crate::error::AppResult;
use crate::models::QualityMetrics;
use crate::store::SharedRegistry;

/// Configure quality metrics routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(list_quality_metrics)
        .service(get_quality_metrics);
}

/// List all quality metrics records.
#[utoipa::path(
    get,
    path = "/api/v1/quality-metrics",
    tag = "Quality Metrics",
    responses(
        (status = 200, description = "All quality metrics in id order", body = Vec<QualityMetrics>)
    )
)]
#[get("/quality-metrics")]
pub async fn list_quality_metrics(registry: web::Data<SharedRegistry>) -> AppResult<HttpResponse> {
    let metrics = registry.lock()?.list_quality_metrics();
    Ok(HttpResponse::Ok().json(metrics))
}

/// Get a single quality metrics record.
#[utoipa::path(
    get,
    path = "/api/v1/quality-metrics/{id}",
    tag = "Quality Metrics",
    params(
        ("id" = u64, Path, description = "Quality metrics ID")
    ),
    responses(
        (status = 200, description = "Quality metrics details", body = QualityMetrics),
        (status = 404, description = "Quality metrics not found", body = crate::error::ErrorResponse)
    )
)]
#[get("/quality-metrics/{id}")]
pub async fn get_quality_metrics(
    registry: web::Data<SharedRegistry>,
    path: web::Path<u64>,
) -> AppResult<HttpResponse> {
    let metrics = registry.lock()?.get_quality_metrics(path.into_inner())?;
    Ok(HttpResponse::Ok().json(metrics))
}
