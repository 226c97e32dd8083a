//! Persistence seam for complaint photos.
//!
//! [`PhotoService`](super::PhotoService) writes photo rows through
//! [`PhotoRepository`] so the storage-then-row ordering can be exercised
//! without Postgres.

mod postgres;

#[cfg(test)]
pub mod memory;

use async_trait::async_trait;

use crate::core::error::Result;
use crate::features::photos::models::Photo;

pub use postgres::PgPhotoRepository;

#[async_trait]
pub trait PhotoRepository: Send + Sync {
    async fn complaint_exists(&self, complaint_id: i64) -> Result<bool>;

    async fn insert_photo(&self, url: &str, storage_key: &str, complaint_id: i64) -> Result<Photo>;

    /// One page of photos, newest first, plus the total count
    async fn list_photos(&self, offset: i64, limit: i64) -> Result<(Vec<Photo>, i64)>;

    async fn find_photo(&self, id: i64) -> Result<Option<Photo>>;

    async fn delete_photo(&self, id: i64) -> Result<()>;
}
