//! Scoring model endpoints.

use actix_web::{HttpResponse, delete, get, post, put, web};
use tracing::info;

use crate::error::AppResult;
use crate::models::{CreateModelRequest, MessageResponse, ScoringModel, UpdateModelRequest};
use crate::store::SharedRegistry;

/// Configure model routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(list_models)
        .service(get_model)
        .service(create_model)
        .service(update_model)
        .service(delete_model);
}

/// List all scoring models.
#[utoipa::path(
    get,
    path = "/api/v1/models",
    tag = "Models",
    responses(
        (status = 200, description = "All models in id order", body = Vec<ScoringModel>)
    )
)]
#[get("/models")]
pub async fn list_models(registry: web::Data<SharedRegistry>) -> AppResult<HttpResponse> {
    let models = registry.lock()?.list_models();
    Ok(HttpResponse::Ok().json(models))
}

/// Get a single scoring model.
#[utoipa::path(
    get,
    path = "/api/v1/models/{id}",
    tag = "Models",
    params(
        ("id" = u64, Path, description = "Model ID")
    ),
    responses(
        (status = 200, description = "Model details", body = ScoringModel),
        (status = 404, description = "Model not found", body = crate::error::ErrorResponse)
    )
)]
#[get("/models/{id}")]
pub async fn get_model(
    registry: web::Data<SharedRegistry>,
    path: web::Path<u64>,
) -> AppResult<HttpResponse> {
    let model = registry.lock()?.get_model(path.into_inner())?;
    Ok(HttpResponse::Ok().json(model))
}

/// Register a scoring model.
#[utoipa::path(
    post,
    path = "/api/v1/models",
    tag = "Models",
    request_body = CreateModelRequest,
    responses(
        (status = 201, description = "Model registered", body = ScoringModel),
        (status = 400, description = "Invalid input", body = crate::error::ErrorResponse)
    )
)]
#[post("/models")]
pub async fn create_model(
    registry: web::Data<SharedRegistry>,
    body: web::Json<CreateModelRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();
    req.validate()?;

    let model = registry.lock()?.create_model(req);

    info!(
        "Model registered: id={}, name={}, version={}",
        model.id, model.model_name, model.version
    );

    Ok(HttpResponse::Created().json(model))
}

/// Rename and/or (de)activate a scoring model.
#[utoipa::path(
    put,
    path = "/api/v1/models/{id}",
    tag = "Models",
    params(
        ("id" = u64, Path, description = "Model ID")
    ),
    request_body = UpdateModelRequest,
    responses(
        (status = 200, description = "Model updated", body = ScoringModel),
        (status = 400, description = "Invalid input", body = crate::error::ErrorResponse),
        (status = 404, description = "Model not found", body = crate::error::ErrorResponse)
    )
)]
#[put("/models/{id}")]
pub async fn update_model(
    registry: web::Data<SharedRegistry>,
    path: web::Path<u64>,
    body: web::Json<UpdateModelRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();
    req.validate()?;

    let model = registry.lock()?.update_model(path.into_inner(), req)?;
    Ok(HttpResponse::Ok().json(model))
}

/// Delete a scoring model.
///
/// Assessments produced by the model are kept.
#[utoipa::path(
    delete,
    path = "/api/v1/models/{id}",
    tag = "Models",
    params(
        ("id" = u64, Path, description = "Model ID")
    ),
    responses(
        (status = 200, description = "Model deleted", body = MessageResponse),
        (status = 404, description = "Model not found", body = crate::error::ErrorResponse)
    )
)]
#[delete("/models/{id}")]
pub async fn delete_model(
    registry: web::Data<SharedRegistry>,
    path: web::Path<u64>,
) -> AppResult<HttpResponse> {
    let (deleted, retained) = {
        let mut registry = registry.lock()?;
        let deleted = registry.delete_model(path.into_inner())?;
        let retained = registry.model_usage(deleted.record.id);
        (deleted, retained)
    };

    info!(
        "Model deleted: id={}, assessments_retained={}",
        deleted.record.id, retained
    );

    Ok(HttpResponse::Ok().json(MessageResponse::new(format!(
        "Model '{}' deleted successfully",
        deleted.record.model_name
    ))))
}
