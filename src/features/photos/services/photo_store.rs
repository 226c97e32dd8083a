use std::sync::Arc;
use tracing::{debug, warn};

use crate::core::error::{AppError, Result};
use crate::modules::storage::{extension_for, photo_key, ObjectStorage};
use crate::shared::constants::{ALLOWED_PHOTO_MIME_TYPES, MAX_PHOTO_SIZE};

/// An uploaded image that passed type and size checks
#[derive(Debug)]
pub struct PhotoUpload {
    data: Vec<u8>,
    content_type: String,
    extension: &'static str,
}

impl PhotoUpload {
    pub fn new(data: Vec<u8>, content_type: &str) -> Result<Self> {
        let extension = extension_for(content_type)
            .filter(|_| ALLOWED_PHOTO_MIME_TYPES.contains(&content_type))
            .ok_or_else(|| {
                AppError::Validation(format!(
                    "The photo must be an image of type: {}",
                    ALLOWED_PHOTO_MIME_TYPES.join(", ")
                ))
            })?;

        if data.is_empty() {
            return Err(AppError::Validation("Photo is required".to_string()));
        }

        if data.len() > MAX_PHOTO_SIZE {
            return Err(AppError::Validation(format!(
                "The photo may not be greater than {} kilobytes",
                MAX_PHOTO_SIZE / 1024
            )));
        }

        Ok(Self {
            data,
            content_type: content_type.to_string(),
            extension,
        })
    }

    pub fn size(&self) -> usize {
        self.data.len()
    }
}

/// Location of a stored photo object
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredPhoto {
    pub key: String,
    pub url: String,
}

/// Writes photo objects to storage
pub struct PhotoStore {
    storage: Arc<dyn ObjectStorage>,
}

impl PhotoStore {
    pub fn new(storage: Arc<dyn ObjectStorage>) -> Self {
        Self { storage }
    }

    /// Upload the photo. Storage failures surface as upstream errors.
    pub async fn store(&self, complaint_id: i64, upload: PhotoUpload) -> Result<StoredPhoto> {
        let key = photo_key(self.storage.photo_prefix(), complaint_id, upload.extension);
        let size = upload.size();

        self.storage
            .put(&key, upload.data, &upload.content_type)
            .await?;

        debug!("Stored photo '{}' ({} bytes)", key, size);
        Ok(StoredPhoto {
            url: self.storage.public_url(&key),
            key,
        })
    }

    /// Remove an object, logging instead of failing
    pub async fn discard(&self, key: &str) {
        if let Err(e) = self.storage.delete(key).await {
            warn!("Failed to remove photo object '{}': {}", key, e);
        }
    }
}
