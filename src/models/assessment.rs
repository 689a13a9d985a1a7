//! GSD assessment models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Scoring result for one image under one model.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct Assessment {
    pub id: u64,
    pub image_id: u64,
    pub model_id: u64,
    /// Ground sample distance
    pub gsd_value: f64,
    pub confidence_score: f64,
    /// Simulated processing time in seconds
    pub processing_time: f64,
    pub assessment_date: DateTime<Utc>,
}

/// Request to run an assessment.
///
/// Only `image_id` and `model_id` are honored. The scoring fields are
/// accepted for client compatibility and replaced by generated values.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct CreateAssessmentRequest {
    pub image_id: u64,
    pub model_id: u64,
    #[serde(default)]
    pub gsd_value: Option<f64>,
    #[serde(default)]
    pub confidence_score: Option<f64>,
    #[serde(default)]
    pub processing_time: Option<f64>,
}

/// Partial update of an assessment.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct UpdateAssessmentRequest {
    pub gsd_value: Option<f64>,
    pub confidence_score: Option<f64>,
}

impl UpdateAssessmentRequest {
    pub fn apply(self, assessment: &mut Assessment) {
        if let Some(gsd_value) = self.gsd_value {
            assessment.gsd_value = gsd_value;
        }
        if let Some(confidence_score) = self.confidence_score {
            assessment.confidence_score = confidence_score;
        }
    }
}
