use sqlx::FromRow;

use crate::features::access::Role;

/// Database model for a directory entry
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub role: Role,
    pub avatar: Option<String>,
}
