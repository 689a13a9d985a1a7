//! Assessment store operations.

use chrono::Utc;

use crate::error::{AppError, AppResult};
use crate::models::{Assessment, CreateAssessmentRequest, UpdateAssessmentRequest};
use crate::services::scoring;

use super::{CascadeReport, Deleted, Registry, StoreKind};

impl Registry {
    /// All assessments in id order.
    pub fn list_assessments(&self) -> Vec<Assessment> {
        self.assessments.to_vec()
    }

    /// Get an assessment by ID.
    pub fn get_assessment(&self, id: u64) -> AppResult<Assessment> {
        self.assessments
            .get(id)
            .cloned()
            .ok_or_else(|| AppError::not_found(StoreKind::Assessments, id))
    }

    /// Score an image with a model.
    ///
    /// Both references must be live. Scores are generated, never taken from
    /// the request. The assessment and its quality metrics are inserted
    /// together; if the metrics insert fails the assessment is withdrawn.
    pub fn create_assessment(&mut self, req: CreateAssessmentRequest) -> AppResult<Assessment> {
        self.ensure_exists(StoreKind::Images, req.image_id)?;
        self.ensure_exists(StoreKind::Models, req.model_id)?;

        let scores = scoring::generate(self.scores.as_mut());
        let assessment = self
            .assessments
            .insert_with(|id| Assessment {
                id,
                image_id: req.image_id,
                model_id: req.model_id,
                gsd_value: scores.gsd_value,
                confidence_score: scores.confidence_score,
                processing_time: scores.processing_time,
                assessment_date: Utc::now(),
            })
            .clone();

        if let Err(err) = self.insert_quality_metrics(assessment.id) {
            self.assessments.remove(assessment.id);
            return Err(err);
        }

        Ok(assessment)
    }

    /// Merge GSD value and/or confidence into an assessment.
    pub fn update_assessment(
        &mut self,
        id: u64,
        req: UpdateAssessmentRequest,
    ) -> AppResult<Assessment> {
        let assessment = self
            .assessments
            .get_mut(id)
            .ok_or_else(|| AppError::not_found(StoreKind::Assessments, id))?;
        req.apply(assessment);

        Ok(assessment.clone())
    }

    /// Delete an assessment and its quality metrics.
    pub fn delete_assessment(&mut self, id: u64) -> AppResult<Deleted<Assessment>> {
        let record = self
            .assessments
            .remove(id)
            .ok_or_else(|| AppError::not_found(StoreKind::Assessments, id))?;
        let quality_metrics = self.cascade_from_assessments(&[id]);

        Ok(Deleted {
            record,
            cascade: CascadeReport {
                quality_metrics,
                ..Default::default()
            },
        })
    }
}
