//! Image metadata endpoints.

use actix_web::{HttpResponse, delete, get, post, put, web};
use tracing::info;

use crate::error::AppResult;
use crate::models::{Assessment, CreateImageRequest, Image, MessageResponse, UpdateImageRequest};
use crate::store::SharedRegistry;

/// Configure image routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(list_images)
        .service(get_image)
        .service(create_image)
        .service(update_image)
        .service(delete_image)
        .service(list_image_assessments);
}

/// List all images.
#[utoipa::path(
    get,
    path = "/api/v1/images",
    tag = "Images",
    responses(
        (status = 200, description = "All images in id order", body = Vec<Image>)
    )
)]
#[get("/images")]
pub async fn list_images(registry: web::Data<SharedRegistry>) -> AppResult<HttpResponse> {
    let images = registry.lock()?.list_images();
    Ok(HttpResponse::Ok().json(images))
}

/// Get a single image.
#[utoipa::path(
    get,
    path = "/api/v1/images/{id}",
    tag = "Images",
    params(
        ("id" = u64, Path, description = "Image ID")
    ),
    responses(
        (status = 200, description = "Image details", body = Image),
        (status = 404, description = "Image not found", body = crate::error::ErrorResponse)
    )
)]
#[get("/images/{id}")]
pub async fn get_image(
    registry: web::Data<SharedRegistry>,
    path: web::Path<u64>,
) -> AppResult<HttpResponse> {
    let image = registry.lock()?.get_image(path.into_inner())?;
    Ok(HttpResponse::Ok().json(image))
}

/// Register an uploaded image for an existing user.
#[utoipa::path(
    post,
    path = "/api/v1/images",
    tag = "Images",
    request_body = CreateImageRequest,
    responses(
        (status = 201, description = "Image created", body = Image),
        (status = 400, description = "Unknown user or invalid input", body = crate::error::ErrorResponse)
    )
)]
#[post("/images")]
pub async fn create_image(
    registry: web::Data<SharedRegistry>,
    body: web::Json<CreateImageRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();
    req.validate()?;

    let image = registry.lock()?.create_image(req)?;

    info!(
        "Image created: id={}, user_id={}, filename={}",
        image.id, image.user_id, image.filename
    );

    Ok(HttpResponse::Created().json(image))
}

/// Update image filename and/or status.
#[utoipa::path(
    put,
    path = "/api/v1/images/{id}",
    tag = "Images",
    params(
        ("id" = u64, Path, description = "Image ID")
    ),
    request_body = UpdateImageRequest,
    responses(
        (status = 200, description = "Image updated", body = Image),
        (status = 400, description = "Invalid input", body = crate::error::ErrorResponse),
        (status = 404, description = "Image not found", body = crate::error::ErrorResponse)
    )
)]
#[put("/images/{id}")]
pub async fn update_image(
    registry: web::Data<SharedRegistry>,
    path: web::Path<u64>,
    body: web::Json<UpdateImageRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();
    req.validate()?;

    let image = registry.lock()?.update_image(path.into_inner(), req)?;
    Ok(HttpResponse::Ok().json(image))
}

/// Delete an image together with its assessments and their quality metrics.
#[utoipa::path(
    delete,
    path = "/api/v1/images/{id}",
    tag = "Images",
    params(
        ("id" = u64, Path, description = "Image ID")
    ),
    responses(
        (status = 200, description = "Image deleted", body = MessageResponse),
        (status = 404, description = "Image not found", body = crate::error::ErrorResponse)
    )
)]
#[delete("/images/{id}")]
pub async fn delete_image(
    registry: web::Data<SharedRegistry>,
    path: web::Path<u64>,
) -> AppResult<HttpResponse> {
    let deleted = registry.lock()?.delete_image(path.into_inner())?;

    info!(
        "Image deleted: id={}, assessments={}, quality_metrics={}",
        deleted.record.id, deleted.cascade.assessments, deleted.cascade.quality_metrics
    );

    Ok(HttpResponse::Ok().json(MessageResponse::new(format!(
        "Image '{}' deleted successfully",
        deleted.record.filename
    ))))
}

/// List the assessments of one image.
#[utoipa::path(
    get,
    path = "/api/v1/images/{id}/assessments",
    tag = "Images",
    params(
        ("id" = u64, Path, description = "Image ID")
    ),
    responses(
        (status = 200, description = "Assessments of the image in id order", body = Vec<Assessment>),
        (status = 404, description = "Image not found", body = crate::error::ErrorResponse)
    )
)]
#[get("/images/{id}/assessments")]
pub async fn list_image_assessments(
    registry: web::Data<SharedRegistry>,
    path: web::Path<u64>,
) -> AppResult<HttpResponse> {
    let assessments = registry.lock()?.list_image_assessments(path.into_inner())?;
    Ok(HttpResponse::Ok().json(assessments))
}
