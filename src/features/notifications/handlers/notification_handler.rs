use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    Json,
};
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::core::extractor::{AppJson, AppPath};
use crate::features::auth::guards::RequireNotifier;
use crate::features::auth::model::AuthenticatedUser;
use crate::features::notifications::dtos::{
    CreateNotificationDto, NotificationResponseDto, UpdateNotificationDto,
};
use crate::features::notifications::services::NotificationService;
use crate::shared::types::{ApiResponse, Meta, PaginationQuery};

#[utoipa::path(
    get,
    path = "/api/notifications",
    params(PaginationQuery),
    responses(
        (status = 200, description = "List of notifications", body = ApiResponse<Vec<NotificationResponseDto>>),
        (status = 401, description = "Unauthorized")
    ),
    tag = "notifications",
    security(("bearer_auth" = []))
)]
pub async fn list_notifications(
    _user: AuthenticatedUser,
    State(service): State<Arc<NotificationService>>,
    Query(params): Query<PaginationQuery>,
) -> Result<Json<ApiResponse<Vec<NotificationResponseDto>>>> {
    let (notifications, total) = service.list(params.offset(), params.limit()).await?;
    Ok(Json(ApiResponse::success(
        Some(notifications),
        None,
        Some(Meta { total }),
    )))
}

#[utoipa::path(
    get,
    path = "/api/notifications/{id}",
    params(
        ("id" = i64, Path, description = "Notification ID")
    ),
    responses(
        (status = 200, description = "Notification found", body = ApiResponse<NotificationResponseDto>),
        (status = 404, description = "Notification not found")
    ),
    tag = "notifications",
    security(("bearer_auth" = []))
)]
pub async fn get_notification(
    _user: AuthenticatedUser,
    State(service): State<Arc<NotificationService>>,
    AppPath(id): AppPath<i64>,
) -> Result<Json<ApiResponse<NotificationResponseDto>>> {
    let notification = service.get(id).await?;
    Ok(Json(ApiResponse::success(Some(notification), None, None)))
}

/// Notify a quality officer, with a push message when they have a device registered
#[utoipa::path(
    post,
    path = "/api/notifications",
    request_body = CreateNotificationDto,
    responses(
        (status = 201, description = "Notification created", body = ApiResponse<NotificationResponseDto>),
        (status = 400, description = "Validation error or target is not a quality officer"),
        (status = 403, description = "Forbidden - administrative role required"),
        (status = 404, description = "Complaint not found")
    ),
    tag = "notifications",
    security(("bearer_auth" = []))
)]
pub async fn create_notification(
    RequireNotifier(_user): RequireNotifier,
    State(service): State<Arc<NotificationService>>,
    AppJson(dto): AppJson<CreateNotificationDto>,
) -> Result<(StatusCode, Json<ApiResponse<NotificationResponseDto>>)> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let notification = service.create(dto).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(
            Some(notification),
            Some("Notification sent successfully".to_string()),
            None,
        )),
    ))
}

#[utoipa::path(
    put,
    path = "/api/notifications/{id}",
    params(
        ("id" = i64, Path, description = "Notification ID")
    ),
    request_body = UpdateNotificationDto,
    responses(
        (status = 200, description = "Notification updated", body = ApiResponse<NotificationResponseDto>),
        (status = 400, description = "Validation error"),
        (status = 403, description = "Forbidden - administrative role required"),
        (status = 404, description = "Notification or complaint not found")
    ),
    tag = "notifications",
    security(("bearer_auth" = []))
)]
pub async fn update_notification(
    RequireNotifier(_user): RequireNotifier,
    State(service): State<Arc<NotificationService>>,
    AppPath(id): AppPath<i64>,
    AppJson(dto): AppJson<UpdateNotificationDto>,
) -> Result<Json<ApiResponse<NotificationResponseDto>>> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let notification = service.update(id, dto).await?;
    Ok(Json(ApiResponse::success(
        Some(notification),
        Some("Notification updated successfully".to_string()),
        None,
    )))
}

#[utoipa::path(
    delete,
    path = "/api/notifications/{id}",
    params(
        ("id" = i64, Path, description = "Notification ID")
    ),
    responses(
        (status = 200, description = "Notification deleted"),
        (status = 403, description = "Forbidden - administrative role required"),
        (status = 404, description = "Notification not found")
    ),
    tag = "notifications",
    security(("bearer_auth" = []))
)]
pub async fn delete_notification(
    RequireNotifier(_user): RequireNotifier,
    State(service): State<Arc<NotificationService>>,
    AppPath(id): AppPath<i64>,
) -> Result<Json<ApiResponse<()>>> {
    service.delete(id).await?;
    Ok(Json(ApiResponse::success(
        None,
        Some("Notification deleted successfully".to_string()),
        None,
    )))
}
