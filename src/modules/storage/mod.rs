//! Object storage for complaint photos.
//!
//! Services depend on the [`ObjectStorage`] trait; [`MinIOClient`] is the
//! S3-compatible implementation used in production.

mod keys;
mod minio_client;

#[cfg(test)]
pub mod memory;

use async_trait::async_trait;
use thiserror::Error;

use crate::core::error::AppError;

pub use keys::{extension_for, photo_key};
pub use minio_client::MinIOClient;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Failed to upload '{key}': {reason}")]
    Upload { key: String, reason: String },

    #[error("Failed to delete '{key}': {reason}")]
    Delete { key: String, reason: String },

    #[error("Storage configuration error: {0}")]
    Config(String),
}

impl From<StorageError> for AppError {
    fn from(err: StorageError) -> Self {
        AppError::Upstream(err.to_string())
    }
}

#[async_trait]
pub trait ObjectStorage: Send + Sync {
    /// Store `data` under `key`
    async fn put(&self, key: &str, data: Vec<u8>, content_type: &str)
        -> Result<(), StorageError>;

    async fn delete(&self, key: &str) -> Result<(), StorageError>;

    /// Publicly reachable URL of `key`
    fn public_url(&self, key: &str) -> String;

    /// Prefix under which photos are stored
    fn photo_prefix(&self) -> &str;
}
