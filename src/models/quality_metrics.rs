//! Quality metrics derived from an assessment.

use serde::Serialize;
use utoipa::ToSchema;

pub const PLACEHOLDER_SHARPNESS: f64 = 0.8;
pub const PLACEHOLDER_NOISE: f64 = 0.1;
pub const PLACEHOLDER_CONTRAST: f64 = 2.5;
pub const PLACEHOLDER_GRADE: &str = "good";

/// Quality attributes of one assessment (1:1).
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct QualityMetrics {
    pub id: u64,
    pub assessment_id: u64,
    pub sharpness_score: f64,
    pub noise_level: f64,
    pub contrast_ratio: f64,
    pub blur_detected: bool,
    pub quality_grade: String,
}

impl QualityMetrics {
    /// Fixed-value metrics attached to every new assessment.
    pub fn placeholder(id: u64, assessment_id: u64) -> Self {
        Self {
            id,
            assessment_id,
            sharpness_score: PLACEHOLDER_SHARPNESS,
            noise_level: PLACEHOLDER_NOISE,
            contrast_ratio: PLACEHOLDER_CONTRAST,
            blur_detected: false,
            quality_grade: PLACEHOLDER_GRADE.to_string(),
        }
    }
}
