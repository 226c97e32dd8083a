use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    Json,
};
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::core::extractor::{AppJson, AppPath};
use crate::features::auth::guards::RequireIntakeStaff;
use crate::features::auth::model::AuthenticatedUser;
use crate::features::complaints::dtos::{
    ComplaintDetailResponseDto, ComplaintResponseDto, CreateComplaintDto, UpdateComplaintDto,
};
use crate::features::complaints::services::ComplaintService;
use crate::shared::types::{ApiResponse, Meta, PaginationQuery};

/// List complaints with their client (paginated)
#[utoipa::path(
    get,
    path = "/api/complaints",
    params(PaginationQuery),
    responses(
        (status = 200, description = "List of complaints", body = ApiResponse<Vec<ComplaintResponseDto>>),
        (status = 401, description = "Unauthorized")
    ),
    tag = "complaints",
    security(("bearer_auth" = []))
)]
pub async fn list_complaints(
    _user: AuthenticatedUser,
    State(service): State<Arc<ComplaintService>>,
    Query(params): Query<PaginationQuery>,
) -> Result<Json<ApiResponse<Vec<ComplaintResponseDto>>>> {
    let (complaints, total) = service.list(params.offset(), params.limit()).await?;
    Ok(Json(ApiResponse::success(
        Some(complaints),
        None,
        Some(Meta { total }),
    )))
}

#[utoipa::path(
    get,
    path = "/api/complaints/{id}",
    params(
        ("id" = i64, Path, description = "Complaint ID")
    ),
    responses(
        (status = 200, description = "Complaint found", body = ApiResponse<ComplaintResponseDto>),
        (status = 404, description = "Complaint not found")
    ),
    tag = "complaints",
    security(("bearer_auth" = []))
)]
pub async fn get_complaint(
    _user: AuthenticatedUser,
    State(service): State<Arc<ComplaintService>>,
    AppPath(id): AppPath<i64>,
) -> Result<Json<ApiResponse<ComplaintResponseDto>>> {
    let complaint = service.get(id).await?;
    Ok(Json(ApiResponse::success(Some(complaint), None, None)))
}

/// Complaint with client and photos
#[utoipa::path(
    get,
    path = "/api/complaints/{id}/details",
    params(
        ("id" = i64, Path, description = "Complaint ID")
    ),
    responses(
        (status = 200, description = "Complaint details", body = ApiResponse<ComplaintDetailResponseDto>),
        (status = 404, description = "Complaint not found")
    ),
    tag = "complaints",
    security(("bearer_auth" = []))
)]
pub async fn get_complaint_details(
    _user: AuthenticatedUser,
    State(service): State<Arc<ComplaintService>>,
    AppPath(id): AppPath<i64>,
) -> Result<Json<ApiResponse<ComplaintDetailResponseDto>>> {
    let details = service.get_details(id).await?;
    Ok(Json(ApiResponse::success(Some(details), None, None)))
}

#[utoipa::path(
    post,
    path = "/api/complaints",
    request_body = CreateComplaintDto,
    responses(
        (status = 201, description = "Complaint created", body = ApiResponse<ComplaintResponseDto>),
        (status = 400, description = "Validation error"),
        (status = 403, description = "Forbidden - commercial or administrative role required"),
        (status = 404, description = "Client not found")
    ),
    tag = "complaints",
    security(("bearer_auth" = []))
)]
pub async fn create_complaint(
    RequireIntakeStaff(_user): RequireIntakeStaff,
    State(service): State<Arc<ComplaintService>>,
    AppJson(dto): AppJson<CreateComplaintDto>,
) -> Result<(StatusCode, Json<ApiResponse<ComplaintResponseDto>>)> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let complaint = service.create(dto).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(
            Some(complaint),
            Some("Complaint created successfully".to_string()),
            None,
        )),
    ))
}

#[utoipa::path(
    put,
    path = "/api/complaints/{id}",
    params(
        ("id" = i64, Path, description = "Complaint ID")
    ),
    request_body = UpdateComplaintDto,
    responses(
        (status = 200, description = "Complaint updated", body = ApiResponse<ComplaintResponseDto>),
        (status = 400, description = "Validation error"),
        (status = 403, description = "Forbidden - commercial or administrative role required"),
        (status = 404, description = "Complaint or client not found")
    ),
    tag = "complaints",
    security(("bearer_auth" = []))
)]
pub async fn update_complaint(
    RequireIntakeStaff(_user): RequireIntakeStaff,
    State(service): State<Arc<ComplaintService>>,
    AppPath(id): AppPath<i64>,
    AppJson(dto): AppJson<UpdateComplaintDto>,
) -> Result<Json<ApiResponse<ComplaintResponseDto>>> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let complaint = service.update(id, dto).await?;
    Ok(Json(ApiResponse::success(
        Some(complaint),
        Some("Complaint updated successfully".to_string()),
        None,
    )))
}

#[utoipa::path(
    delete,
    path = "/api/complaints/{id}",
    params(
        ("id" = i64, Path, description = "Complaint ID")
    ),
    responses(
        (status = 200, description = "Complaint deleted"),
        (status = 403, description = "Forbidden - commercial or administrative role required"),
        (status = 404, description = "Complaint not found")
    ),
    tag = "complaints",
    security(("bearer_auth" = []))
)]
pub async fn delete_complaint(
    RequireIntakeStaff(_user): RequireIntakeStaff,
    State(service): State<Arc<ComplaintService>>,
    AppPath(id): AppPath<i64>,
) -> Result<Json<ApiResponse<()>>> {
    service.delete(id).await?;
    Ok(Json(ApiResponse::success(
        None,
        Some("Complaint deleted successfully".to_string()),
        None,
    )))
}
