use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::features::photos::models::Photo;

/// Multipart form for uploading a photo (used for OpenAPI documentation)
#[derive(Debug, ToSchema)]
#[allow(dead_code)]
pub struct UploadPhotoDto {
    /// Image file (jpeg, png, gif, webp or bmp, max 2 MiB)
    #[schema(format = Binary, content_media_type = "application/octet-stream")]
    pub photo: String,
    /// Complaint the photo belongs to
    pub complaint_id: i64,
}

/// Response DTO for photo
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PhotoResponseDto {
    pub id: i64,
    pub url: String,
    pub complaint_id: i64,
    pub created_at: DateTime<Utc>,
}

impl From<Photo> for PhotoResponseDto {
    fn from(p: Photo) -> Self {
        Self {
            id: p.id,
            url: p.url,
            complaint_id: p.complaint_id,
            created_at: p.created_at,
        }
    }
}
