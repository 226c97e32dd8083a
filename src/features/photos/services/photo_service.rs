use std::sync::Arc;
use tracing::info;

use super::{PhotoStore, PhotoUpload};
use crate::core::error::{AppError, Result};
use crate::features::photos::dtos::PhotoResponseDto;
use crate::features::photos::models::Photo;
use crate::features::photos::repository::PhotoRepository;

/// Service for complaint photos
pub struct PhotoService {
    repository: Arc<dyn PhotoRepository>,
    store: PhotoStore,
}

impl PhotoService {
    pub fn new(repository: Arc<dyn PhotoRepository>, store: PhotoStore) -> Self {
        Self { repository, store }
    }

    /// Attach a photo to an existing complaint.
    ///
    /// The object is written before the row; if the insert fails the object
    /// is removed again.
    pub async fn upload(&self, complaint_id: i64, upload: PhotoUpload) -> Result<PhotoResponseDto> {
        if !self.repository.complaint_exists(complaint_id).await? {
            return Err(AppError::NotFound(format!(
                "Complaint {} not found",
                complaint_id
            )));
        }

        let stored = self.store.store(complaint_id, upload).await?;

        let photo = match self
            .repository
            .insert_photo(&stored.url, &stored.key, complaint_id)
            .await
        {
            Ok(photo) => photo,
            Err(e) => {
                tracing::error!("Failed to save photo row for '{}': {:?}", stored.key, e);
                self.store.discard(&stored.key).await;
                return Err(e);
            }
        };

        info!(
            "Photo {} stored for complaint {}: {}",
            photo.id, complaint_id, photo.storage_key
        );
        Ok(photo.into())
    }

    pub async fn list(&self, offset: i64, limit: i64) -> Result<(Vec<PhotoResponseDto>, i64)> {
        let (photos, total) = self.repository.list_photos(offset, limit).await?;
        Ok((photos.into_iter().map(|p| p.into()).collect(), total))
    }

    pub async fn get(&self, id: i64) -> Result<PhotoResponseDto> {
        self.find(id).await.map(|p| p.into())
    }

    /// Delete the row, then the stored object (best effort)
    pub async fn delete(&self, id: i64) -> Result<()> {
        let photo = self.find(id).await?;

        self.repository.delete_photo(id).await.map_err(|e| {
            tracing::error!("Failed to delete photo {}: {:?}", id, e);
            e
        })?;

        self.store.discard(&photo.storage_key).await;

        info!("Photo {} deleted", id);
        Ok(())
    }

    async fn find(&self, id: i64) -> Result<Photo> {
        self.repository
            .find_photo(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Photo {} not found", id)))
    }
}
