//! OpenAPI documentation configuration.

use utoipa::OpenApi;

use crate::{api, error, models, store};

/// OpenAPI documentation.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "GSD Assessment API",
        version = "1.0.0",
        description = "In-memory registry of users, images, scoring models and simulated GSD assessments"
    ),
    servers(
        (url = "/", description = "Local server")
    ),
    paths(
        // Health endpoints
        api::health::info,
        api::health::health,
        // User endpoints
        api::users::list_users,
        api::users::get_user,
        api::users::create_user,
        api::users::update_user,
        api::users::delete_user,
        // Image endpoints
        api::images::list_images,
        api::images::get_image,
        api::images::create_image,
        api::images::update_image,
        api::images::delete_image,
        api::images::list_image_assessments,
        // Model endpoints
        api::models::list_models,
        api::models::get_model,
        api::models::create_model,
        api::models::update_model,
        api::models::delete_model,
        // Assessment endpoints
        api::assessments::list_assessments,
        api::assessments::get_assessment,
        api::assessments::create_assessment,
        api::assessments::update_assessment,
        api::assessments::delete_assessment,
        api::assessments::get_assessment_quality_metrics,
        // Quality metrics endpoints
        api::quality_metrics::list_quality_metrics,
        api::quality_metrics::get_quality_metrics,
        // Maintenance
        api::reset::reset_data,
    ),
    components(
        schemas(
            // Common
            error::ErrorResponse,
            models::MessageResponse,
            store::StoreCounts,
            // Health
            api::health::HealthResponse,
            api::health::ServerInfoResponse,
            api::health::EndpointsByCategory,
            // Users
            models::UserRole,
            models::User,
            models::CreateUserRequest,
            models::UpdateUserRequest,
            // Images
            models::ImageStatus,
            models::Image,
            models::CreateImageRequest,
            models::UpdateImageRequest,
            // Models
            models::ScoringModel,
            models::CreateModelRequest,
            models::UpdateModelRequest,
            // Assessments
            models::Assessment,
            models::CreateAssessmentRequest,
            models::UpdateAssessmentRequest,
            models::QualityMetrics,
        )
    ),
    tags(
        (name = "Health", description = "Health check and service info"),
        (name = "Users", description = "User accounts"),
        (name = "Images", description = "Uploaded image metadata"),
        (name = "Models", description = "Scoring model registry"),
        (name = "Assessments", description = "Simulated GSD assessments"),
        (name = "Quality Metrics", description = "Metrics derived from assessments"),
        (name = "Maintenance", description = "Test harness operations")
    )
)]
pub struct ApiDoc;
