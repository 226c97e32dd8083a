use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for a complaint photo
#[derive(Debug, Clone, FromRow)]
pub struct Photo {
    pub id: i64,
    pub url: String,
    /// Object key in storage
    pub storage_key: String,
    pub complaint_id: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
