use std::sync::Arc;

use axum::{extract::State, Json};

use crate::core::error::Result;
use crate::core::extractor::{AppJson, AppPath};
use crate::features::auth::model::AuthenticatedUser;
use crate::features::reports::dtos::{
    AssignReportDto, AssignmentOutcomeDto, AssignmentResponseDto, ValidateItemsDto,
};
use crate::features::reports::services::{AssignmentService, ValidationService};
use crate::shared::types::ApiResponse;

/// State for the assignment and validation workflow
#[derive(Clone)]
pub struct WorkflowState {
    pub assignment_service: Arc<AssignmentService>,
    pub validation_service: Arc<ValidationService>,
}

/// Assign quality officers to a report
#[utoipa::path(
    post,
    path = "/api/reports/{id}/assign",
    params(
        ("id" = i64, Path, description = "Report ID")
    ),
    request_body = AssignReportDto,
    responses(
        (status = 200, description = "Officers assigned", body = ApiResponse<AssignmentOutcomeDto>),
        (status = 400, description = "Missing date, empty selection or invalid officer"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden - admin or administrative role required"),
        (status = 404, description = "Report not found")
    ),
    tag = "reports",
    security(("bearer_auth" = []))
)]
pub async fn assign_report(
    user: AuthenticatedUser,
    State(state): State<WorkflowState>,
    AppPath(id): AppPath<i64>,
    AppJson(dto): AppJson<AssignReportDto>,
) -> Result<Json<ApiResponse<AssignmentOutcomeDto>>> {
    let outcome = state.assignment_service.assign(&user, id, dto).await?;
    Ok(Json(ApiResponse::success(
        Some(outcome),
        Some("Report assigned successfully".to_string()),
        None,
    )))
}

/// Validate the complaint items of an assigned report
#[utoipa::path(
    post,
    path = "/api/reports/{id}/validate-items",
    params(
        ("id" = i64, Path, description = "Report ID")
    ),
    request_body = ValidateItemsDto,
    responses(
        (status = 200, description = "Validation recorded", body = ApiResponse<AssignmentResponseDto>),
        (status = 400, description = "Empty or invalid selection, missing or malformed date"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Not a quality officer or report not assigned to caller"),
        (status = 404, description = "Report not found")
    ),
    tag = "reports",
    security(("bearer_auth" = []))
)]
pub async fn validate_items(
    user: AuthenticatedUser,
    State(state): State<WorkflowState>,
    AppPath(id): AppPath<i64>,
    AppJson(dto): AppJson<ValidateItemsDto>,
) -> Result<Json<ApiResponse<AssignmentResponseDto>>> {
    let assignment = state
        .validation_service
        .validate_items(&user, id, dto)
        .await?;
    Ok(Json(ApiResponse::success(
        Some(assignment),
        Some("Items validated successfully".to_string()),
        None,
    )))
}
