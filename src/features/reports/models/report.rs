use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for report
#[derive(Debug, Clone, FromRow)]
pub struct Report {
    pub id: i64,
    pub title: String,
    pub content: String,
    /// The one complaint this report examines, if any
    pub complaint_id: Option<i64>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
