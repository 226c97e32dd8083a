use async_trait::async_trait;
use sqlx::PgPool;

use super::PhotoRepository;
use crate::core::error::{AppError, Result};
use crate::features::photos::models::Photo;

pub struct PgPhotoRepository {
    pool: PgPool,
}

impl PgPhotoRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PhotoRepository for PgPhotoRepository {
    async fn complaint_exists(&self, complaint_id: i64) -> Result<bool> {
        let exists = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM complaints WHERE id = $1)",
        )
        .bind(complaint_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(exists)
    }

    async fn insert_photo(&self, url: &str, storage_key: &str, complaint_id: i64) -> Result<Photo> {
        let photo = sqlx::query_as::<_, Photo>(
            r#"
            INSERT INTO photos (url, storage_key, complaint_id)
            VALUES ($1, $2, $3)
            RETURNING id, url, storage_key, complaint_id, created_at, updated_at
            "#,
        )
        .bind(url)
        .bind(storage_key)
        .bind(complaint_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(photo)
    }

    async fn list_photos(&self, offset: i64, limit: i64) -> Result<(Vec<Photo>, i64)> {
        let total = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM photos")
            .fetch_one(&self.pool)
            .await?;

        let photos = sqlx::query_as::<_, Photo>(
            r#"
            SELECT id, url, storage_key, complaint_id, created_at, updated_at
            FROM photos
            ORDER BY created_at DESC, id DESC
            OFFSET $1 LIMIT $2
            "#,
        )
        .bind(offset)
        .bind(limit)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to list photos: {:?}", e);
            AppError::Database(e)
        })?;

        Ok((photos, total))
    }

    async fn find_photo(&self, id: i64) -> Result<Option<Photo>> {
        let photo = sqlx::query_as::<_, Photo>(
            r#"
            SELECT id, url, storage_key, complaint_id, created_at, updated_at
            FROM photos
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(photo)
    }

    async fn delete_photo(&self, id: i64) -> Result<()> {
        sqlx::query("DELETE FROM photos WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}
