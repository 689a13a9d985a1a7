//! Quality metrics store operations.
//!
//! Metrics are only ever created as a side effect of an assessment and only
//! ever removed with it, so there is no public create or delete here.

use crate::error::{AppError, AppResult};
use crate::models::QualityMetrics;

use super::{Registry, StoreKind};

impl Registry {
    /// All quality metrics in id order.
    pub fn list_quality_metrics(&self) -> Vec<QualityMetrics> {
        self.quality_metrics.to_vec()
    }

    /// Get a quality metrics record by ID.
    pub fn get_quality_metrics(&self, id: u64) -> AppResult<QualityMetrics> {
        self.quality_metrics
            .get(id)
            .cloned()
            .ok_or_else(|| AppError::not_found(StoreKind::QualityMetrics, id))
    }

    /// The metrics record of an assessment.
    pub fn quality_metrics_for_assessment(&self, assessment_id: u64) -> AppResult<QualityMetrics> {
        if !self.assessments.contains(assessment_id) {
            return Err(AppError::not_found(StoreKind::Assessments, assessment_id));
        }

        self.quality_metrics
            .iter()
            .find(|qm| qm.assessment_id == assessment_id)
            .cloned()
            .ok_or_else(|| {
                AppError::NotFound(format!("Quality metrics for assessment {}", assessment_id))
            })
    }

    /// Attach placeholder metrics to a live assessment.
    pub(crate) fn insert_quality_metrics(&mut self, assessment_id: u64) -> AppResult<u64> {
        self.ensure_exists(StoreKind::Assessments, assessment_id)?;

        let metrics = self
            .quality_metrics
            .insert_with(|id| QualityMetrics::placeholder(id, assessment_id));

        Ok(metrics.id)
    }
}
