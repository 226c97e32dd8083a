use std::sync::Arc;

use axum::{extract::State, Json};
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::core::extractor::AppJson;
use crate::features::auth::model::AuthenticatedUser;
use crate::features::users::dtos::{UpdatePushTokenDto, UserResponseDto};
use crate::features::users::services::UserService;
use crate::shared::types::ApiResponse;

/// List quality officers available for assignment
#[utoipa::path(
    get,
    path = "/api/quality-officers",
    responses(
        (status = 200, description = "List of quality officers", body = ApiResponse<Vec<UserResponseDto>>),
        (status = 401, description = "Unauthorized")
    ),
    tag = "users",
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn list_quality_officers(
    _user: AuthenticatedUser,
    State(service): State<Arc<UserService>>,
) -> Result<Json<ApiResponse<Vec<UserResponseDto>>>> {
    let officers = service.list_quality_officers().await?;
    Ok(Json(ApiResponse::success(Some(officers), None, None)))
}

/// Store the caller's Expo push token
#[utoipa::path(
    put,
    path = "/api/users/push-token",
    request_body = UpdatePushTokenDto,
    responses(
        (status = 200, description = "Push token saved"),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized")
    ),
    tag = "users",
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn update_push_token(
    user: AuthenticatedUser,
    State(service): State<Arc<UserService>>,
    AppJson(dto): AppJson<UpdatePushTokenDto>,
) -> Result<Json<ApiResponse<()>>> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    service
        .update_push_token(user.user_id, &dto.expo_push_token)
        .await?;
    Ok(Json(ApiResponse::success(
        None,
        Some("Push token saved".to_string()),
        None,
    )))
}
