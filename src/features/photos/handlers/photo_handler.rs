use axum::{
    extract::{Multipart, Query, State},
    http::StatusCode,
    Json,
};
use std::sync::Arc;
use tracing::debug;

use crate::core::error::{AppError, Result};
use crate::core::extractor::AppPath;
use crate::features::auth::guards::RequireIntakeStaff;
use crate::features::auth::model::AuthenticatedUser;
use crate::features::photos::dtos::{PhotoResponseDto, UploadPhotoDto};
use crate::features::photos::services::{PhotoService, PhotoUpload};
use crate::shared::types::{ApiResponse, Meta, PaginationQuery};

/// Fields read from the upload form
#[derive(Debug, Default)]
struct PhotoForm {
    photo: Option<(Vec<u8>, String)>,
    complaint_id: Option<String>,
}

async fn read_form(mut multipart: Multipart) -> Result<PhotoForm> {
    let mut form = PhotoForm::default();

    while let Some(field) = multipart.next_field().await.map_err(|e| {
        debug!("Failed to read multipart field: {}", e);
        AppError::BadRequest(format!("Failed to read multipart data: {}", e))
    })? {
        let field_name = field.name().unwrap_or("").to_string();

        match field_name.as_str() {
            "photo" => {
                let content_type = field
                    .content_type()
                    .map(|s| s.to_string())
                    .unwrap_or_else(|| "application/octet-stream".to_string());
                let data = field.bytes().await.map_err(|e| {
                    AppError::BadRequest(format!("Failed to read photo data: {}", e))
                })?;
                form.photo = Some((data.to_vec(), content_type));
            }
            "complaint_id" => {
                let text = field.text().await.map_err(|e| {
                    AppError::BadRequest(format!("Failed to read complaint_id field: {}", e))
                })?;
                form.complaint_id = Some(text);
            }
            _ => debug!("Ignoring unknown field: {}", field_name),
        }
    }

    Ok(form)
}

/// Upload a photo for a complaint
#[utoipa::path(
    post,
    path = "/api/photos",
    request_body(
        content = UploadPhotoDto,
        content_type = "multipart/form-data",
    ),
    responses(
        (status = 201, description = "Photo uploaded", body = ApiResponse<PhotoResponseDto>),
        (status = 400, description = "Missing or invalid photo or complaint id"),
        (status = 403, description = "Forbidden - commercial or administrative role required"),
        (status = 404, description = "Complaint not found"),
        (status = 502, description = "Storage unavailable")
    ),
    tag = "photos",
    security(("bearer_auth" = []))
)]
pub async fn upload_photo(
    RequireIntakeStaff(user): RequireIntakeStaff,
    State(service): State<Arc<PhotoService>>,
    multipart: Multipart,
) -> Result<(StatusCode, Json<ApiResponse<PhotoResponseDto>>)> {
    let form = read_form(multipart).await?;

    let complaint_id = form
        .complaint_id
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .ok_or_else(|| AppError::Validation("Complaint is required".to_string()))?
        .parse::<i64>()
        .map_err(|_| AppError::Validation("Complaint id must be an integer".to_string()))?;

    let (data, content_type) = form
        .photo
        .ok_or_else(|| AppError::Validation("Photo is required".to_string()))?;
    let upload = PhotoUpload::new(data, &content_type)?;

    let photo = service.upload(complaint_id, upload).await?;
    debug!("User {} uploaded photo {}", user.user_id, photo.id);

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(
            Some(photo),
            Some("Photo uploaded successfully".to_string()),
            None,
        )),
    ))
}

#[utoipa::path(
    get,
    path = "/api/photos",
    params(PaginationQuery),
    responses(
        (status = 200, description = "List of photos", body = ApiResponse<Vec<PhotoResponseDto>>),
        (status = 401, description = "Unauthorized")
    ),
    tag = "photos",
    security(("bearer_auth" = []))
)]
pub async fn list_photos(
    _user: AuthenticatedUser,
    State(service): State<Arc<PhotoService>>,
    Query(params): Query<PaginationQuery>,
) -> Result<Json<ApiResponse<Vec<PhotoResponseDto>>>> {
    let (photos, total) = service.list(params.offset(), params.limit()).await?;
    Ok(Json(ApiResponse::success(
        Some(photos),
        None,
        Some(Meta { total }),
    )))
}

#[utoipa::path(
    get,
    path = "/api/photos/{id}",
    params(
        ("id" = i64, Path, description = "Photo ID")
    ),
    responses(
        (status = 200, description = "Photo found", body = ApiResponse<PhotoResponseDto>),
        (status = 404, description = "Photo not found")
    ),
    tag = "photos",
    security(("bearer_auth" = []))
)]
pub async fn get_photo(
    _user: AuthenticatedUser,
    State(service): State<Arc<PhotoService>>,
    AppPath(id): AppPath<i64>,
) -> Result<Json<ApiResponse<PhotoResponseDto>>> {
    let photo = service.get(id).await?;
    Ok(Json(ApiResponse::success(Some(photo), None, None)))
}

#[utoipa::path(
    delete,
    path = "/api/photos/{id}",
    params(
        ("id" = i64, Path, description = "Photo ID")
    ),
    responses(
        (status = 200, description = "Photo deleted"),
        (status = 403, description = "Forbidden - commercial or administrative role required"),
        (status = 404, description = "Photo not found")
    ),
    tag = "photos",
    security(("bearer_auth" = []))
)]
pub async fn delete_photo(
    RequireIntakeStaff(_user): RequireIntakeStaff,
    State(service): State<Arc<PhotoService>>,
    AppPath(id): AppPath<i64>,
) -> Result<Json<ApiResponse<()>>> {
    service.delete(id).await?;
    Ok(Json(ApiResponse::success(
        None,
        Some("Photo deleted successfully".to_string()),
        None,
    )))
}
