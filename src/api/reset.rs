//! Test-harness reset endpoint.

use actix_web::{HttpResponse, post, web};
use tracing::warn;

use crate::error::AppResult;
use crate::models::MessageResponse;
use crate::store::SharedRegistry;

/// Configure reset route.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(reset_data);
}

/// Remove every record from every store.
///
/// Intended for test runs. Only mounted when `GSD_ENABLE_RESET` is on.
#[utoipa::path(
    post,
    path = "/api/v1/reset",
    tag = "Maintenance",
    responses(
        (status = 200, description = "All data removed", body = MessageResponse)
    )
)]
#[post("/reset")]
pub async fn reset_data(registry: web::Data<SharedRegistry>) -> AppResult<HttpResponse> {
    let cleared = registry.lock()?.reset_all();

    warn!(
        "All data reset: users={}, images={}, models={}, assessments={}, quality_metrics={}",
        cleared.users, cleared.images, cleared.models, cleared.assessments, cleared.quality_metrics
    );

    Ok(HttpResponse::Ok().json(MessageResponse::new("All data reset successfully")))
}
