//! GSD assessment endpoints.

use actix_web::{HttpResponse, delete, get, post, put, web};
use tracing::info;

use crate::error::AppResult;
use crate::models::{
    Assessment, CreateAssessmentRequest, MessageResponse, QualityMetrics,
    UpdateAssessmentRequest,
};
use crate::store::SharedRegistry;

/// Configure assessment routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(list_assessments)
        .service(get_assessment)
        .service(create_assessment)
        .service(update_assessment)
        .service(delete_assessment)
        .service(get_assessment_quality_metrics);
}

/// List all assessments.
#[utoipa::path(
    get,
    path = "/api/v1/assessments",
    tag = "Assessments",
    responses(
        (status = 200, description = "All assessments in id order", body = Vec<Assessment>)
    )
)]
#[get("/assessments")]
pub async fn list_assessments(registry: web::Data<SharedRegistry>) -> AppResult<HttpResponse> {
    let assessments = registry.lock()?.list_assessments();
    Ok(HttpResponse::Ok().json(assessments))
}

/// Get a single assessment.
#[utoipa::path(
    get,
    path = "/api/v1/assessments/{id}",
    tag = "Assessments",
    params(
        ("id" = u64, Path, description = "Assessment ID")
    ),
    responses(
        (status = 200, description = "Assessment details", body = Assessment),
        (status = 404, description = "Assessment not found", body = crate::error::ErrorResponse)
    )
)]
#[get("/assessments/{id}")]
pub async fn get_assessment(
    registry: web::Data<SharedRegistry>,
    path: web::Path<u64>,
) -> AppResult<HttpResponse> {
    let assessment = registry.lock()?.get_assessment(path.into_inner())?;
    Ok(HttpResponse::Ok().json(assessment))
}

/// Run a simulated GSD assessment.
///
/// The image and model must exist. GSD value, confidence and processing
/// time are generated by the server; values in the request body are
/// ignored. A quality metrics record is created alongside.
#[utoipa::path(
    post,
    path = "/api/v1/assessments",
    tag = "Assessments",
    request_body = CreateAssessmentRequest,
    responses(
        (status = 201, description = "Assessment created", body = Assessment),
        (status = 400, description = "Unknown image or model", body = crate::error::ErrorResponse)
    )
)]
#[post("/assessments")]
pub async fn create_assessment(
    registry: web::Data<SharedRegistry>,
    body: web::Json<CreateAssessmentRequest>,
) -> AppResult<HttpResponse> {
    let assessment = registry.lock()?.create_assessment(body.into_inner())?;

    info!(
        "Assessment created: id={}, image_id={}, model_id={}, gsd_value={}",
        assessment.id, assessment.image_id, assessment.model_id, assessment.gsd_value
    );

    Ok(HttpResponse::Created().json(assessment))
}

/// Update GSD value and/or confidence of an assessment.
#[utoipa::path(
    put,
    path = "/api/v1/assessments/{id}",
    tag = "Assessments",
    params(
        ("id" = u64, Path, description = "Assessment ID")
    ),
    request_body = UpdateAssessmentRequest,
    responses(
        (status = 200, description = "Assessment updated", body = Assessment),
        (status = 404, description = "Assessment not found", body = crate::error::ErrorResponse)
    )
)]
#[put("/assessments/{id}")]
pub async fn update_assessment(
    registry: web::Data<SharedRegistry>,
    path: web::Path<u64>,
    body: web::Json<UpdateAssessmentRequest>,
) -> AppResult<HttpResponse> {
    let assessment = registry
        .lock()?
        .update_assessment(path.into_inner(), body.into_inner())?;
    Ok(HttpResponse::Ok().json(assessment))
}

/// Delete an assessment and its quality metrics.
#[utoipa::path(
    delete,
    path = "/api/v1/assessments/{id}",
    tag = "Assessments",
    params(
        ("id" = u64, Path, description = "Assessment ID")
    ),
    responses(
        (status = 200, description = "Assessment deleted", body = MessageResponse),
        (status = 404, description = "Assessment not found", body = crate::error::ErrorResponse)
    )
)]
#[delete("/assessments/{id}")]
pub async fn delete_assessment(
    registry: web::Data<SharedRegistry>,
    path: web::Path<u64>,
) -> AppResult<HttpResponse> {
    let deleted = registry.lock()?.delete_assessment(path.into_inner())?;

    info!(
        "Assessment deleted: id={}, quality_metrics={}",
        deleted.record.id, deleted.cascade.quality_metrics
    );

    Ok(HttpResponse::Ok().json(MessageResponse::new(format!(
        "Assessment for image {} deleted successfully",
        deleted.record.image_id
    ))))
}

/// Get the quality metrics of an assessment.
#[utoipa::path(
    get,
    path = "/api/v1/assessments/{id}/quality-metrics",
    tag = "Assessments",
    params(
        ("id" = u64, Path, description = "Assessment ID")
    ),
    responses(
        (status = 200, description = "Quality metrics of the assessment", body = QualityMetrics),
        (status = 404, description = "Assessment not found", body = crate::error::ErrorResponse)
    )
)]
#[get("/assessments/{id}/quality-metrics")]
pub async fn get_assessment_quality_metrics(
    registry: web::Data<SharedRegistry>,
    path: web::Path<u64>,
) -> AppResult<HttpResponse> {
    let metrics = registry
        .lock()?
        .quality_metrics_for_assessment(path.into_inner())?;
    Ok(HttpResponse::Ok().json(metrics))
}
