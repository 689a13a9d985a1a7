//! Uploaded image metadata models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::error::{AppError, AppResult};

/// Processing status of an image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ImageStatus {
    #[default]
    Uploaded,
    Processing,
    Completed,
    Failed,
}

impl ImageStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Uploaded => "uploaded",
            Self::Processing => "processing",
            Self::Completed => "completed",
            Self::Failed => "failed",
        }
    }
}

impl std::fmt::Display for ImageStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Image stored in the registry.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct Image {
    pub id: u64,
    pub filename: String,
    /// Size in bytes
    pub file_size: u64,
    pub width: u32,
    pub height: u32,
    pub format: String,
    /// Owning user
    pub user_id: u64,
    pub upload_date: DateTime<Utc>,
    pub status: ImageStatus,
}

fn default_width() -> u32 {
    1920
}

fn default_height() -> u32 {
    1080
}

fn default_format() -> String {
    "jpg".to_string()
}

/// Request to register an uploaded image.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct CreateImageRequest {
    pub filename: String,
    pub file_size: u64,
    #[serde(default = "default_width")]
    pub width: u32,
    #[serde(default = "default_height")]
    pub height: u32,
    #[serde(default = "default_format")]
    pub format: String,
    pub user_id: u64,
}

impl CreateImageRequest {
    pub fn validate(&self) -> AppResult<()> {
        validate_filename(&self.filename)
    }
}

/// Partial update of image metadata.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct UpdateImageRequest {
    pub filename: Option<String>,
    pub status: Option<ImageStatus>,
}

impl UpdateImageRequest {
    pub fn validate(&self) -> AppResult<()> {
        match self.filename {
            Some(ref filename) => validate_filename(filename),
            None => Ok(()),
        }
    }

    pub fn apply(self, image: &mut Image) {
        if let Some(filename) = self.filename {
            image.filename = filename;
        }
        if let Some(status) = self.status {
            image.status = status;
        }
    }
}

fn validate_filename(filename: &str) -> AppResult<()> {
    if filename.trim().is_empty() {
        return Err(AppError::InvalidInput("Filename is required".to_string()));
    }
    Ok(())
}
