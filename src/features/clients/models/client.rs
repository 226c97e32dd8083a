use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for client
#[derive(Debug, Clone, FromRow)]
pub struct Client {
    pub id: i64,
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
