use std::sync::Arc;

use axum::{routing::get, Router};

use crate::features::complaints::handlers;
use crate::features::complaints::services::ComplaintService;

pub fn routes(service: Arc<ComplaintService>) -> Router {
    Router::new()
        .route(
            "/api/complaints",
            get(handlers::list_complaints).post(handlers::create_complaint),
        )
        .route(
            "/api/complaints/{id}",
            get(handlers::get_complaint)
                .put(handlers::update_complaint)
                .delete(handlers::delete_complaint),
        )
        .route(
            "/api/complaints/{id}/details",
            get(handlers::get_complaint_details),
        )
        .with_state(service)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::test_helpers::{quality_officer, with_user};
    use axum_test::TestServer;
    use serde_json::json;
    use sqlx::postgres::PgPoolOptions;

    fn server() -> TestServer {
        // Never connected: the role guard rejects before any query runs
        let pool = PgPoolOptions::new()
            .connect_lazy("postgres://localhost/unused")
            .unwrap();
        let app = routes(Arc::new(ComplaintService::new(pool)));
        TestServer::new(with_user(app, quality_officer(3))).unwrap()
    }

    #[tokio::test]
    async fn test_quality_officer_cannot_record_complaints() {
        let response = server()
            .post("/api/complaints")
            .json(&json!({ "title": "Brake noise", "client_id": 1 }))
            .await;

        response.assert_status_forbidden();
    }

    #[tokio::test]
    async fn test_quality_officer_cannot_delete_complaints() {
        server()
            .delete("/api/complaints/1")
            .await
            .assert_status_forbidden();
    }
}
