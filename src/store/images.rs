//! Image store operations.

use chrono::Utc;

use crate::error::{AppError, AppResult};
use crate::models::{Assessment, CreateImageRequest, Image, ImageStatus, UpdateImageRequest};

use super::{Deleted, Registry, StoreKind};

impl Registry {
    /// All images in id order.
    pub fn list_images(&self) -> Vec<Image> {
        self.images.to_vec()
    }

    /// Get an image by ID.
    pub fn get_image(&self, id: u64) -> AppResult<Image> {
        self.images
            .get(id)
            .cloned()
            .ok_or_else(|| AppError::not_found(StoreKind::Images, id))
    }

    /// Register an image for an existing user.
    pub fn create_image(&mut self, req: CreateImageRequest) -> AppResult<Image> {
        self.ensure_exists(StoreKind::Users, req.user_id)?;

        let image = self.images.insert_with(|id| Image {
            id,
            filename: req.filename,
            file_size: req.file_size,
            width: req.width,
            height: req.height,
            format: req.format,
            user_id: req.user_id,
            upload_date: Utc::now(),
            status: ImageStatus::Uploaded,
        });

        Ok(image.clone())
    }

    /// Merge filename and/or status into an image.
    pub fn update_image(&mut self, id: u64, req: UpdateImageRequest) -> AppResult<Image> {
        let image = self
            .images
            .get_mut(id)
            .ok_or_else(|| AppError::not_found(StoreKind::Images, id))?;
        req.apply(image);

        Ok(image.clone())
    }

    /// Delete an image with its assessments and their metrics.
    pub fn delete_image(&mut self, id: u64) -> AppResult<Deleted<Image>> {
        let record = self
            .images
            .remove(id)
            .ok_or_else(|| AppError::not_found(StoreKind::Images, id))?;
        let cascade = self.cascade_from_images(&[id]);

        Ok(Deleted { record, cascade })
    }

    /// Assessments of one image, in id order.
    pub fn list_image_assessments(&self, image_id: u64) -> AppResult<Vec<Assessment>> {
        if !self.images.contains(image_id) {
            return Err(AppError::not_found(StoreKind::Images, image_id));
        }

        Ok(self
            .assessments
            .iter()
            .filter(|a| a.image_id == image_id)
            .cloned()
            .collect())
    }
}
