use chrono::{DateTime, Utc};
use serde_json::Value;
use sqlx::FromRow;

/// Database model for complaint
#[derive(Debug, Clone, FromRow)]
pub struct Complaint {
    pub id: i64,
    pub title: String,
    /// Free-form intake form as captured by the front office
    pub form_data: Option<Value>,
    pub client_id: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
