//! API endpoint modules.

use actix_web::web;

use crate::error::AppError;

pub mod assessments;
pub mod health;
pub mod images;
pub mod models;
pub mod openapi;
pub mod quality_metrics;
pub mod reset;
pub mod users;

pub use assessments::configure_routes as configure_assessment_routes;
pub use health::{configure_health_routes, configure_root_routes};
pub use images::configure_routes as configure_image_routes;
pub use models::configure_routes as configure_model_routes;
pub use openapi::ApiDoc;
pub use quality_metrics::configure_routes as configure_quality_metrics_routes;
pub use reset::configure_routes as configure_reset_routes;
pub use users::configure_routes as configure_user_routes;

/// JSON extractor config that reports malformed bodies as `INVALID_INPUT`.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .error_handler(|err, _req| AppError::InvalidInput(err.to_string()).into())
}

/// Path extractor config that reports ids that are not unsigned integers as
/// `INVALID_INPUT`.
pub fn path_config() -> web::PathConfig {
    web::PathConfig::default().error_handler(|err, req| {
        AppError::InvalidInput(format!("{}: {}", req.path(), err)).into()
    })
}
