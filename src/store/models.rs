//! Scoring model store operations.

use chrono::Utc;

use crate::error::{AppError, AppResult};
use crate::models::{CreateModelRequest, ScoringModel, UpdateModelRequest};

use super::{Deleted, Registry, StoreKind};

impl Registry {
    /// All models in id order.
    pub fn list_models(&self) -> Vec<ScoringModel> {
        self.models.to_vec()
    }

    /// Get a model by ID.
    pub fn get_model(&self, id: u64) -> AppResult<ScoringModel> {
        self.models
            .get(id)
            .cloned()
            .ok_or_else(|| AppError::not_found(StoreKind::Models, id))
    }

    /// Register a model. Models reference nothing, so this cannot fail.
    pub fn create_model(&mut self, req: CreateModelRequest) -> ScoringModel {
        self.models
            .insert_with(|id| ScoringModel {
                id,
                model_name: req.model_name,
                version: req.version,
                architecture: req.architecture,
                accuracy: req.accuracy,
                is_active: req.is_active,
                training_date: Utc::now(),
            })
            .clone()
    }

    /// Merge name and/or active flag into a model.
    pub fn update_model(&mut self, id: u64, req: UpdateModelRequest) -> AppResult<ScoringModel> {
        let model = self
            .models
            .get_mut(id)
            .ok_or_else(|| AppError::not_found(StoreKind::Models, id))?;
        req.apply(model);

        Ok(model.clone())
    }

    /// Delete a model.
    ///
    /// Assessments produced by the model are kept, so the cascade report is
    /// always empty.
    pub fn delete_model(&mut self, id: u64) -> AppResult<Deleted<ScoringModel>> {
        let record = self
            .models
            .remove(id)
            .ok_or_else(|| AppError::not_found(StoreKind::Models, id))?;

        Ok(Deleted {
            record,
            cascade: Default::default(),
        })
    }

    /// Number of live assessments that reference `model_id`.
    pub fn model_usage(&self, model_id: u64) -> usize {
        self.assessments
            .iter()
            .filter(|a| a.model_id == model_id)
            .count()
    }
}
