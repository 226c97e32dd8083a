use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for a notification sent to a quality officer
#[derive(Debug, Clone, FromRow)]
pub struct Notification {
    pub id: i64,
    pub message: String,
    pub user_id: i64,
    /// Cleared when the complaint is deleted
    pub complaint_id: Option<i64>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
