//! Scoring model descriptors.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::error::{AppError, AppResult};

/// Registered scoring model.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct ScoringModel {
    pub id: u64,
    pub model_name: String,
    pub version: String,
    pub architecture: String,
    pub accuracy: f64,
    pub is_active: bool,
    pub training_date: DateTime<Utc>,
}

fn default_architecture() -> String {
    "ResNet50".to_string()
}

fn default_accuracy() -> f64 {
    0.95
}

fn default_is_active() -> bool {
    true
}

/// Request to register a scoring model.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct CreateModelRequest {
    pub model_name: String,
    pub version: String,
    #[serde(default = "default_architecture")]
    pub architecture: String,
    #[serde(default = "default_accuracy")]
    pub accuracy: f64,
    #[serde(default = "default_is_active")]
    pub is_active: bool,
}

impl CreateModelRequest {
    pub fn validate(&self) -> AppResult<()> {
        validate_model_name(&self.model_name)?;
        if self.version.trim().is_empty() {
            return Err(AppError::InvalidInput("Version is required".to_string()));
        }
        Ok(())
    }
}

/// Partial update of a scoring model.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct UpdateModelRequest {
    pub model_name: Option<String>,
    pub is_active: Option<bool>,
}

impl UpdateModelRequest {
    pub fn validate(&self) -> AppResult<()> {
        match self.model_name {
            Some(ref name) => validate_model_name(name),
            None => Ok(()),
        }
    }

    pub fn apply(self, model: &mut ScoringModel) {
        if let Some(model_name) = self.model_name {
            model.model_name = model_name;
        }
        if let Some(is_active) = self.is_active {
            model.is_active = is_active;
        }
    }
}

fn validate_model_name(name: &str) -> AppResult<()> {
    if name.trim().is_empty() {
        return Err(AppError::InvalidInput("Model name is required".to_string()));
    }
    Ok(())
}
