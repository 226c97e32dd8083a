use async_trait::async_trait;
use chrono::Utc;
use std::collections::{BTreeMap, HashSet};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

use super::PhotoRepository;
use crate::core::error::{AppError, Result};
use crate::features::photos::models::Photo;

/// In-memory stand-in for Postgres
#[derive(Default)]
pub struct InMemoryPhotoRepository {
    complaints: Mutex<HashSet<i64>>,
    photos: Mutex<BTreeMap<i64, Photo>>,
    fail_inserts: AtomicBool,
}

impl InMemoryPhotoRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_complaint(self, id: i64) -> Self {
        self.complaints.lock().unwrap().insert(id);
        self
    }

    /// Make every photo insert fail like a rejected row
    pub fn failing_inserts(self) -> Self {
        self.fail_inserts.store(true, Ordering::SeqCst);
        self
    }

    pub fn photos(&self) -> Vec<Photo> {
        self.photos.lock().unwrap().values().cloned().collect()
    }

    pub fn complaint_ids(&self) -> Vec<i64> {
        self.complaints.lock().unwrap().iter().copied().collect()
    }
}

#[async_trait]
impl PhotoRepository for InMemoryPhotoRepository {
    async fn complaint_exists(&self, complaint_id: i64) -> Result<bool> {
        Ok(self.complaints.lock().unwrap().contains(&complaint_id))
    }

    async fn insert_photo(&self, url: &str, storage_key: &str, complaint_id: i64) -> Result<Photo> {
        if self.fail_inserts.load(Ordering::SeqCst) {
            return Err(AppError::Database(sqlx::Error::PoolTimedOut));
        }

        let mut photos = self.photos.lock().unwrap();
        let id = photos.keys().next_back().map_or(1, |last| last + 1);
        let photo = Photo {
            id,
            url: url.to_string(),
            storage_key: storage_key.to_string(),
            complaint_id,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };
        photos.insert(id, photo.clone());
        Ok(photo)
    }

    async fn list_photos(&self, offset: i64, limit: i64) -> Result<(Vec<Photo>, i64)> {
        let photos = self.photos.lock().unwrap();
        let page = photos
            .values()
            .rev()
            .skip(offset as usize)
            .take(limit as usize)
            .cloned()
            .collect();
        Ok((page, photos.len() as i64))
    }

    async fn find_photo(&self, id: i64) -> Result<Option<Photo>> {
        Ok(self.photos.lock().unwrap().get(&id).cloned())
    }

    async fn delete_photo(&self, id: i64) -> Result<()> {
        self.photos.lock().unwrap().remove(&id);
        Ok(())
    }
}
