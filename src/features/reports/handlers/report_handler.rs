use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    Json,
};
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::core::extractor::{AppJson, AppPath};
use crate::features::auth::guards::{RequireQualityOfficer, RequireReportManager};
use crate::features::auth::model::AuthenticatedUser;
use crate::features::reports::dtos::{
    CreateReportDto, OfficerReportDto, ReportDetailResponseDto, ReportListItemDto,
    ReportResponseDto, UpdateReportDto,
};
use crate::features::reports::services::ReportService;
use crate::shared::types::{ApiResponse, Meta, PaginationQuery};

/// List reports (paginated)
#[utoipa::path(
    get,
    path = "/api/reports",
    params(PaginationQuery),
    responses(
        (status = 200, description = "List of reports", body = ApiResponse<Vec<ReportListItemDto>>),
        (status = 401, description = "Unauthorized")
    ),
    tag = "reports",
    security(("bearer_auth" = []))
)]
pub async fn list_reports(
    _user: AuthenticatedUser,
    State(service): State<Arc<ReportService>>,
    Query(params): Query<PaginationQuery>,
) -> Result<Json<ApiResponse<Vec<ReportListItemDto>>>> {
    let (reports, total) = service.list(params.offset(), params.limit()).await?;
    Ok(Json(ApiResponse::success(
        Some(reports),
        None,
        Some(Meta { total }),
    )))
}

/// Create a report
#[utoipa::path(
    post,
    path = "/api/reports",
    request_body = CreateReportDto,
    responses(
        (status = 201, description = "Report created", body = ApiResponse<ReportResponseDto>),
        (status = 400, description = "Validation error"),
        (status = 403, description = "Forbidden - administrative role required"),
        (status = 404, description = "Complaint or photo not found")
    ),
    tag = "reports",
    security(("bearer_auth" = []))
)]
pub async fn create_report(
    RequireReportManager(_user): RequireReportManager,
    State(service): State<Arc<ReportService>>,
    AppJson(dto): AppJson<CreateReportDto>,
) -> Result<(StatusCode, Json<ApiResponse<ReportResponseDto>>)> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let report = service.create(dto).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(
            Some(report),
            Some("Report created successfully".to_string()),
            None,
        )),
    ))
}

/// Get a report with its complaint, photos and assignments
#[utoipa::path(
    get,
    path = "/api/reports/{id}",
    params(
        ("id" = i64, Path, description = "Report ID")
    ),
    responses(
        (status = 200, description = "Report found", body = ApiResponse<ReportDetailResponseDto>),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Report not found")
    ),
    tag = "reports",
    security(("bearer_auth" = []))
)]
pub async fn get_report(
    _user: AuthenticatedUser,
    State(service): State<Arc<ReportService>>,
    AppPath(id): AppPath<i64>,
) -> Result<Json<ApiResponse<ReportDetailResponseDto>>> {
    let report = service.get_detail(id).await?;
    Ok(Json(ApiResponse::success(Some(report), None, None)))
}

/// Update a report
#[utoipa::path(
    put,
    path = "/api/reports/{id}",
    params(
        ("id" = i64, Path, description = "Report ID")
    ),
    request_body = UpdateReportDto,
    responses(
        (status = 200, description = "Report updated", body = ApiResponse<ReportResponseDto>),
        (status = 400, description = "Validation error or complaint change on a validated report"),
        (status = 403, description = "Forbidden - administrative role required"),
        (status = 404, description = "Report, complaint or photo not found")
    ),
    tag = "reports",
    security(("bearer_auth" = []))
)]
pub async fn update_report(
    RequireReportManager(_user): RequireReportManager,
    State(service): State<Arc<ReportService>>,
    AppPath(id): AppPath<i64>,
    AppJson(dto): AppJson<UpdateReportDto>,
) -> Result<Json<ApiResponse<ReportResponseDto>>> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let report = service.update(id, dto).await?;
    Ok(Json(ApiResponse::success(
        Some(report),
        Some("Report updated successfully".to_string()),
        None,
    )))
}

/// Delete a report
#[utoipa::path(
    delete,
    path = "/api/reports/{id}",
    params(
        ("id" = i64, Path, description = "Report ID")
    ),
    responses(
        (status = 200, description = "Report deleted"),
        (status = 403, description = "Forbidden - administrative role required"),
        (status = 404, description = "Report not found")
    ),
    tag = "reports",
    security(("bearer_auth" = []))
)]
pub async fn delete_report(
    RequireReportManager(_user): RequireReportManager,
    State(service): State<Arc<ReportService>>,
    AppPath(id): AppPath<i64>,
) -> Result<Json<ApiResponse<()>>> {
    service.delete(id).await?;
    Ok(Json(ApiResponse::success(
        None,
        Some("Report deleted successfully".to_string()),
        None,
    )))
}

/// Reports assigned to the calling quality officer
#[utoipa::path(
    get,
    path = "/api/my-reports",
    responses(
        (status = 200, description = "Assigned reports", body = ApiResponse<Vec<OfficerReportDto>>),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden - quality officer role required")
    ),
    tag = "reports",
    security(("bearer_auth" = []))
)]
pub async fn list_my_reports(
    RequireQualityOfficer(user): RequireQualityOfficer,
    State(service): State<Arc<ReportService>>,
) -> Result<Json<ApiResponse<Vec<OfficerReportDto>>>> {
    let reports = service.list_for_officer(user.user_id).await?;
    Ok(Json(ApiResponse::success(Some(reports), None, None)))
}
