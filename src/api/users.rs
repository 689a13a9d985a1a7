//! User account endpoints.

use actix_web::{HttpResponse, delete, get, post, put, web};
use tracing::info;

use crate::error::AppResult;
use crate::models::{CreateUserRequest, MessageResponse, UpdateUserRequest, User};
use crate::store::SharedRegistry;

/// Configure user routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(list_users)
        .service(get_user)
        .service(create_user)
        .service(update_user)
        .service(delete_user);
}

/// List all users.
#[utoipa::path(
    get,
    path = "/api/v1/users",
    tag = "Users",
    responses(
        (status = 200, description = "All users in id order", body = Vec<User>)
    )
)]
#[get("/users")]
pub async fn list_users(registry: web::Data<SharedRegistry>) -> AppResult<HttpResponse> {
    let users = registry.lock()?.list_users();
    Ok(HttpResponse::Ok().json(users))
}

/// Get a single user.
#[utoipa::path(
    get,
    path = "/api/v1/users/{id}",
    tag = "Users",
    params(
        ("id" = u64, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "User details", body = User),
        (status = 404, description = "User not found", body = crate::error::ErrorResponse)
    )
)]
#[get("/users/{id}")]
pub async fn get_user(
    registry: web::Data<SharedRegistry>,
    path: web::Path<u64>,
) -> AppResult<HttpResponse> {
    let user = registry.lock()?.get_user(path.into_inner())?;
    Ok(HttpResponse::Ok().json(user))
}

/// Register a user.
///
/// Username and email must not be used by another user. An API key is
/// issued and returned once in the response.
#[utoipa::path(
    post,
    path = "/api/v1/users",
    tag = "Users",
    request_body = CreateUserRequest,
    responses(
        (status = 201, description = "User created", body = User),
        (status = 400, description = "Duplicate username/email or invalid input", body = crate::error::ErrorResponse)
    )
)]
#[post("/users")]
pub async fn create_user(
    registry: web::Data<SharedRegistry>,
    body: web::Json<CreateUserRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();
    req.validate()?;

    let user = registry.lock()?.create_user(req)?;

    info!("User created: id={}, username={}", user.id, user.username);

    Ok(HttpResponse::Created().json(user))
}

/// Update a user. Fields absent from the body are left unchanged.
#[utoipa::path(
    put,
    path = "/api/v1/users/{id}",
    tag = "Users",
    params(
        ("id" = u64, Path, description = "User ID")
    ),
    request_body = UpdateUserRequest,
    responses(
        (status = 200, description = "User updated", body = User),
        (status = 400, description = "Duplicate username/email or invalid input", body = crate::error::ErrorResponse),
        (status = 404, description = "User not found", body = crate::error::ErrorResponse)
    )
)]
#[put("/users/{id}")]
pub async fn update_user(
    registry: web::Data<SharedRegistry>,
    path: web::Path<u64>,
    body: web::Json<UpdateUserRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();
    req.validate()?;

    let user = registry.lock()?.update_user(path.into_inner(), req)?;
    Ok(HttpResponse::Ok().json(user))
}

/// Delete a user together with their images, the images' assessments and
/// those assessments' quality metrics.
#[utoipa::path(
    delete,
    path = "/api/v1/users/{id}",
    tag = "Users",
    params(
        ("id" = u64, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "User deleted", body = MessageResponse),
        (status = 404, description = "User not found", body = crate::error::ErrorResponse)
    )
)]
#[delete("/users/{id}")]
pub async fn delete_user(
    registry: web::Data<SharedRegistry>,
    path: web::Path<u64>,
) -> AppResult<HttpResponse> {
    let deleted = registry.lock()?.delete_user(path.into_inner())?;

    info!(
        "User deleted: id={}, images={}, assessments={}, quality_metrics={}",
        deleted.record.id,
        deleted.cascade.images,
        deleted.cascade.assessments,
        deleted.cascade.quality_metrics
    );

    Ok(HttpResponse::Ok().json(MessageResponse::new(format!(
        "User '{}' deleted successfully",
        deleted.record.username
    ))))
}
