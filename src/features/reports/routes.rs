use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};

use crate::features::reports::handlers::{self, WorkflowState};
use crate::features::reports::services::{AssignmentService, ReportService, ValidationService};

/// Report CRUD and the officer's own report list
pub fn routes(service: Arc<ReportService>) -> Router {
    Router::new()
        .route(
            "/api/reports",
            get(handlers::list_reports).post(handlers::create_report),
        )
        .route(
            "/api/reports/{id}",
            get(handlers::get_report)
                .put(handlers::update_report)
                .delete(handlers::delete_report),
        )
        .route("/api/my-reports", get(handlers::list_my_reports))
        .with_state(service)
}

/// Assignment and validation workflow
pub fn workflow_routes(
    assignment_service: Arc<AssignmentService>,
    validation_service: Arc<ValidationService>,
) -> Router {
    let state = WorkflowState {
        assignment_service,
        validation_service,
    };

    Router::new()
        .route("/api/reports/{id}/assign", post(handlers::assign_report))
        .route(
            "/api/reports/{id}/validate-items",
            post(handlers::validate_items),
        )
        .with_state(state)
}
