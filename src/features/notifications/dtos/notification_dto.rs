use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::features::notifications::models::Notification;

/// Response DTO for notification
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct NotificationResponseDto {
    pub id: i64,
    pub message: String,
    pub user_id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_name: Option<String>,
    pub complaint_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub complaint_title: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<Notification> for NotificationResponseDto {
    fn from(n: Notification) -> Self {
        Self {
            id: n.id,
            message: n.message,
            user_id: n.user_id,
            user_name: None,
            complaint_id: n.complaint_id,
            complaint_title: None,
            created_at: n.created_at,
        }
    }
}

/// Request DTO for notifying a quality officer
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateNotificationDto {
    pub user_id: i64,
    #[validate(length(min = 1, max = 1000, message = "Message must be 1-1000 characters"))]
    pub message: String,
    pub complaint_id: Option<i64>,
}

/// Request DTO for editing a notification. Omitted fields are left unchanged;
/// `complaint_id: null` unlinks the complaint.
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
pub struct UpdateNotificationDto {
    #[validate(length(min = 1, max = 1000, message = "Message must be 1-1000 characters"))]
    pub message: Option<String>,
    #[serde(default, deserialize_with = "crate::shared::nullable::deserialize")]
    #[schema(value_type = Option<i64>)]
    pub complaint_id: Option<Option<i64>>,
}
