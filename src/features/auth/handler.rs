use axum::Json;

use crate::core::error::Result;
use crate::features::auth::dto::MeResponseDto;
use crate::features::auth::model::AuthenticatedUser;
use crate::shared::types::ApiResponse;

/// Current principal and what it may do
#[utoipa::path(
    get,
    path = "/api/auth/me",
    responses(
        (status = 200, description = "Current user retrieved successfully", body = ApiResponse<MeResponseDto>),
        (status = 401, description = "Unauthorized")
    ),
    tag = "auth",
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn get_me(user: AuthenticatedUser) -> Result<Json<ApiResponse<MeResponseDto>>> {
    Ok(Json(ApiResponse::success(Some(user.into()), None, None)))
}
