//! Domain models for the GSD assessment server.

use serde::Serialize;
use utoipa::ToSchema;

pub mod assessment;
pub mod image;
pub mod quality_metrics;
pub mod scoring_model;
pub mod user;

// Re-export commonly used types
pub use assessment::{Assessment, CreateAssessmentRequest, UpdateAssessmentRequest};
pub use image::{CreateImageRequest, Image, ImageStatus, UpdateImageRequest};
pub use quality_metrics::QualityMetrics;
pub use scoring_model::{CreateModelRequest, ScoringModel, UpdateModelRequest};
pub use user::{CreateUserRequest, UpdateUserRequest, User, UserRole};

/// Plain confirmation body returned by delete and reset endpoints.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
