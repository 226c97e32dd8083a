use serde_json::json;
use sqlx::PgPool;
use std::sync::Arc;

use crate::core::error::{AppError, Result};
use crate::features::access::Role;
use crate::features::notifications::dtos::{
    CreateNotificationDto, NotificationResponseDto, UpdateNotificationDto,
};
use crate::features::notifications::models::Notification;
use crate::modules::push::{self, PushMessage, PushNotifier};
use crate::shared::constants::NEW_COMPLAINT_PUSH_TITLE;

/// Notification row joined with user name and complaint title
#[derive(sqlx::FromRow)]
struct NotificationRow {
    #[sqlx(flatten)]
    notification: Notification,
    user_name: String,
    complaint_title: Option<String>,
}

impl From<NotificationRow> for NotificationResponseDto {
    fn from(row: NotificationRow) -> Self {
        let mut dto = NotificationResponseDto::from(row.notification);
        dto.user_name = Some(row.user_name);
        dto.complaint_title = row.complaint_title;
        dto
    }
}

const SELECT_WITH_NAMES: &str = r#"
    SELECT n.id, n.message, n.user_id, n.complaint_id, n.created_at, n.updated_at,
           u.name AS user_name, c.title AS complaint_title
    FROM notifications n
    JOIN users u ON u.id = n.user_id
    LEFT JOIN complaints c ON c.id = n.complaint_id
"#;

/// Role and device token of the notification target
type Target = (Role, Option<String>);

/// Only quality officers may be notified; returns their push token
fn check_target(target: Option<Target>) -> Result<Option<String>> {
    match target {
        Some((Role::QualityOfficer, token)) => Ok(token.filter(|t| !t.is_empty())),
        _ => Err(AppError::Validation(
            "Only quality officers can be notified".to_string(),
        )),
    }
}

fn push_message(token: String, notification: &Notification) -> PushMessage {
    PushMessage {
        to: token,
        title: NEW_COMPLAINT_PUSH_TITLE.to_string(),
        body: notification.message.clone(),
        data: json!({ "complaintId": notification.complaint_id }),
    }
}

/// New message and complaint link after applying `dto` to `existing`
fn merge_update(existing: Notification, dto: UpdateNotificationDto) -> (String, Option<i64>) {
    (
        dto.message.unwrap_or(existing.message),
        dto.complaint_id.unwrap_or(existing.complaint_id),
    )
}

/// Service for notifications and their push delivery
pub struct NotificationService {
    pool: PgPool,
    notifier: Arc<dyn PushNotifier>,
}

impl NotificationService {
    pub fn new(pool: PgPool, notifier: Arc<dyn PushNotifier>) -> Self {
        Self { pool, notifier }
    }

    /// Store the notification, then push it to the officer's device if one
    /// is registered. Push delivery never affects the result.
    pub async fn create(&self, dto: CreateNotificationDto) -> Result<NotificationResponseDto> {
        let target = sqlx::query_as::<_, Target>(
            "SELECT role, expo_push_token FROM users WHERE id = $1",
        )
        .bind(dto.user_id)
        .fetch_optional(&self.pool)
        .await?;
        let push_token = check_target(target)?;

        if let Some(complaint_id) = dto.complaint_id {
            self.ensure_complaint_exists(complaint_id).await?;
        }

        let notification = sqlx::query_as::<_, Notification>(
            r#"
            INSERT INTO notifications (message, user_id, complaint_id)
            VALUES ($1, $2, $3)
            RETURNING id, message, user_id, complaint_id, created_at, updated_at
            "#,
        )
        .bind(&dto.message)
        .bind(dto.user_id)
        .bind(dto.complaint_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to create notification: {:?}", e);
            AppError::Database(e)
        })?;

        tracing::info!(
            "Notification {} created for user {}",
            notification.id,
            notification.user_id
        );

        match push_token {
            Some(token) => {
                push::dispatch(self.notifier.clone(), push_message(token, &notification));
            }
            None => tracing::debug!(
                "User {} has no push token, skipping push",
                notification.user_id
            ),
        }

        Ok(notification.into())
    }

    pub async fn list(&self, offset: i64, limit: i64) -> Result<(Vec<NotificationResponseDto>, i64)> {
        let total = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM notifications")
            .fetch_one(&self.pool)
            .await?;

        let rows = sqlx::query_as::<_, NotificationRow>(&format!(
            "{} ORDER BY n.created_at DESC, n.id DESC OFFSET $1 LIMIT $2",
            SELECT_WITH_NAMES
        ))
        .bind(offset)
        .bind(limit)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to list notifications: {:?}", e);
            AppError::Database(e)
        })?;

        Ok((rows.into_iter().map(|r| r.into()).collect(), total))
    }

    pub async fn get(&self, id: i64) -> Result<NotificationResponseDto> {
        sqlx::query_as::<_, NotificationRow>(&format!("{} WHERE n.id = $1", SELECT_WITH_NAMES))
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .map(|r| r.into())
            .ok_or_else(|| AppError::NotFound(format!("Notification {} not found", id)))
    }

    /// Edit the message or complaint link. No push is sent for edits.
    pub async fn update(
        &self,
        id: i64,
        dto: UpdateNotificationDto,
    ) -> Result<NotificationResponseDto> {
        let existing = sqlx::query_as::<_, Notification>(
            r#"
            SELECT id, message, user_id, complaint_id, created_at, updated_at
            FROM notifications
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Notification {} not found", id)))?;

        if let Some(Some(complaint_id)) = dto.complaint_id {
            self.ensure_complaint_exists(complaint_id).await?;
        }

        let (message, complaint_id) = merge_update(existing, dto);

        sqlx::query(
            r#"
            UPDATE notifications
            SET message = $2, complaint_id = $3, updated_at = NOW()
            WHERE id = $1
            "#,
        )
        .bind(id)
        .bind(&message)
        .bind(complaint_id)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to update notification {}: {:?}", id, e);
            AppError::Database(e)
        })?;

        tracing::info!("Notification {} updated", id);
        self.get(id).await
    }

    pub async fn delete(&self, id: i64) -> Result<()> {
        let result = sqlx::query("DELETE FROM notifications WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Notification {} not found", id)));
        }
        Ok(())
    }

    async fn ensure_complaint_exists(&self, complaint_id: i64) -> Result<()> {
        let exists = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM complaints WHERE id = $1)",
        )
        .bind(complaint_id)
        .fetch_one(&self.pool)
        .await?;

        if !exists {
            return Err(AppError::NotFound(format!(
                "Complaint {} not found",
                complaint_id
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn notification(complaint_id: Option<i64>) -> Notification {
        Notification {
            id: 1,
            message: "Report 7 is ready for review".to_string(),
            user_id: 3,
            complaint_id,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_only_quality_officers_are_targets() {
        let err = check_target(Some((Role::Commercial, None))).unwrap_err();
        assert!(
            matches!(err, AppError::Validation(msg) if msg == "Only quality officers can be notified")
        );
        assert!(check_target(None).is_err());
    }

    #[test]
    fn test_target_token_is_optional() {
        assert_eq!(check_target(Some((Role::QualityOfficer, None))).unwrap(), None);
        assert_eq!(
            check_target(Some((Role::QualityOfficer, Some(String::new())))).unwrap(),
            None
        );
        assert_eq!(
            check_target(Some((
                Role::QualityOfficer,
                Some("ExponentPushToken[abc]".to_string())
            )))
            .unwrap(),
            Some("ExponentPushToken[abc]".to_string())
        );
    }

    #[test]
    fn test_update_keeps_omitted_fields() {
        let merged = merge_update(notification(Some(42)), UpdateNotificationDto::default());
        assert_eq!(merged, ("Report 7 is ready for review".to_string(), Some(42)));

        let merged = merge_update(
            notification(Some(42)),
            UpdateNotificationDto {
                message: Some("Report 7 was revised".to_string()),
                complaint_id: None,
            },
        );
        assert_eq!(merged, ("Report 7 was revised".to_string(), Some(42)));
    }

    #[test]
    fn test_update_relinks_or_clears_complaint() {
        let relinked = merge_update(
            notification(Some(42)),
            UpdateNotificationDto {
                message: None,
                complaint_id: Some(Some(43)),
            },
        );
        assert_eq!(relinked.1, Some(43));

        let cleared = merge_update(
            notification(Some(42)),
            UpdateNotificationDto {
                message: None,
                complaint_id: Some(None),
            },
        );
        assert_eq!(cleared.1, None);
    }

    #[test]
    fn test_push_message_payload() {
        let message = push_message("ExponentPushToken[abc]".to_string(), &notification(Some(42)));
        assert_eq!(message.to, "ExponentPushToken[abc]");
        assert_eq!(message.title, "New complaint");
        assert_eq!(message.body, "Report 7 is ready for review");
        assert_eq!(message.data, json!({ "complaintId": 42 }));

        let message = push_message("t".to_string(), &notification(None));
        assert_eq!(message.data, json!({ "complaintId": null }));
    }
}
