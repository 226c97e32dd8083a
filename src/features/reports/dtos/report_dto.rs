use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use super::AssignmentResponseDto;
use crate::features::reports::models::Report;

/// Response DTO for report
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ReportResponseDto {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub complaint_id: Option<i64>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Report> for ReportResponseDto {
    fn from(r: Report) -> Self {
        Self {
            id: r.id,
            title: r.title,
            content: r.content,
            complaint_id: r.complaint_id,
            created_at: r.created_at,
            updated_at: r.updated_at,
        }
    }
}

/// Request DTO for creating a report
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateReportDto {
    #[validate(length(min = 1, max = 100, message = "Title must be 1-100 characters"))]
    pub title: String,
    #[validate(length(min = 1, message = "Content is required"))]
    pub content: String,
    pub complaint_id: Option<i64>,
    /// Photos to attach to the report
    #[serde(default)]
    pub photo_ids: Vec<i64>,
}

/// Request DTO for updating a report. Omitted fields are left unchanged.
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
pub struct UpdateReportDto {
    #[validate(length(min = 1, max = 100, message = "Title must be 1-100 characters"))]
    pub title: Option<String>,
    #[validate(length(min = 1, message = "Content is required"))]
    pub content: Option<String>,
    /// `null` unlinks the complaint
    #[serde(default, deserialize_with = "crate::shared::nullable::deserialize")]
    #[schema(value_type = Option<i64>)]
    pub complaint_id: Option<Option<i64>>,
    /// Replaces the attached photo set when present
    pub photo_ids: Option<Vec<i64>>,
}

/// Linked complaint as shown on a report
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, sqlx::FromRow)]
pub struct ComplaintSummaryDto {
    pub id: i64,
    pub title: String,
    pub client_id: i64,
}

/// Attached photo as shown on a report
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, sqlx::FromRow)]
pub struct PhotoSummaryDto {
    pub id: i64,
    pub url: String,
}

/// A report in the paginated list, with its complaint and photos
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ReportListItemDto {
    #[serde(flatten)]
    pub report: ReportResponseDto,
    pub complaint: Option<ComplaintSummaryDto>,
    pub photos: Vec<PhotoSummaryDto>,
}

/// Response DTO for report detail
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ReportDetailResponseDto {
    #[serde(flatten)]
    pub report: ReportResponseDto,
    pub complaint: Option<ComplaintSummaryDto>,
    pub photos: Vec<PhotoSummaryDto>,
    pub assignments: Vec<AssignmentResponseDto>,
}

/// A report as seen by the officer assigned to it
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct OfficerReportDto {
    #[serde(flatten)]
    pub report: ReportResponseDto,
    pub assignment: AssignmentResponseDto,
}
