//! Downward cascade removal.
//!
//! Dependents are collected level by level: the ids removed at one level
//! select the rows removed at the next. Callers check the top-level record
//! first, so a not-found leaves every store untouched.

use serde::Serialize;
use utoipa::ToSchema;

use super::Registry;

/// Dependents removed alongside a deleted record.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, ToSchema)]
pub struct CascadeReport {
    pub images: usize,
    pub assessments: usize,
    pub quality_metrics: usize,
}

impl CascadeReport {
    pub fn is_empty(&self) -> bool {
        self.images == 0 && self.assessments == 0 && self.quality_metrics == 0
    }
}

/// A removed record together with what its removal took with it.
#[derive(Debug, Clone)]
pub struct Deleted<T> {
    pub record: T,
    pub cascade: CascadeReport,
}

impl Registry {
    /// Remove every image owned by `user_id`, then their dependents.
    pub(crate) fn cascade_from_user(&mut self, user_id: u64) -> CascadeReport {
        let image_ids: Vec<u64> = self
            .images
            .remove_where(|image| image.user_id == user_id)
            .into_iter()
            .map(|image| image.id)
            .collect();

        let mut report = self.cascade_from_images(&image_ids);
        report.images = image_ids.len();
        report
    }

    /// Remove every assessment of the given images, then their metrics.
    ///
    /// The images themselves are expected to be gone already.
    pub(crate) fn cascade_from_images(&mut self, image_ids: &[u64]) -> CascadeReport {
        let assessment_ids: Vec<u64> = self
            .assessments
            .remove_where(|a| image_ids.contains(&a.image_id))
            .into_iter()
            .map(|a| a.id)
            .collect();

        CascadeReport {
            images: 0,
            assessments: assessment_ids.len(),
            quality_metrics: self.cascade_from_assessments(&assessment_ids),
        }
    }

    /// Remove the metrics of the given assessments. Returns how many went.
    pub(crate) fn cascade_from_assessments(&mut self, assessment_ids: &[u64]) -> usize {
        self.quality_metrics
            .remove_where(|qm| assessment_ids.contains(&qm.assessment_id))
            .len()
    }
}
