use sqlx::PgPool;

use crate::core::error::{AppError, Result};
use crate::features::access::Role;
use crate::features::users::dtos::UserResponseDto;
use crate::features::users::models::User;

/// Service for the user directory and device tokens
pub struct UserService {
    pool: PgPool,
}

impl UserService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Active users who can be assigned to reports
    pub async fn list_quality_officers(&self) -> Result<Vec<UserResponseDto>> {
        let users = sqlx::query_as::<_, User>(
            r#"
            SELECT id, name, email, role, avatar
            FROM users
            WHERE role = $1 AND is_active = TRUE
            ORDER BY name
            "#,
        )
        .bind(Role::QualityOfficer)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to list quality officers: {:?}", e);
            AppError::Database(e)
        })?;

        Ok(users.into_iter().map(|u| u.into()).collect())
    }

    pub async fn update_push_token(&self, user_id: i64, token: &str) -> Result<()> {
        let result = sqlx::query(
            "UPDATE users SET expo_push_token = $2, updated_at = NOW() WHERE id = $1",
        )
        .bind(user_id)
        .bind(token)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to store push token for user {}: {:?}", user_id, e);
            AppError::Database(e)
        })?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("User {} not found", user_id)));
        }

        tracing::debug!("Push token updated for user {}", user_id);
        Ok(())
    }
}
