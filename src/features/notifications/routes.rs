use std::sync::Arc;

use axum::{routing::get, Router};

use crate::features::notifications::handlers;
use crate::features::notifications::services::NotificationService;

pub fn routes(service: Arc<NotificationService>) -> Router {
    Router::new()
        .route(
            "/api/notifications",
            get(handlers::list_notifications).post(handlers::create_notification),
        )
        .route(
            "/api/notifications/{id}",
            get(handlers::get_notification)
                .put(handlers::update_notification)
                .patch(handlers::update_notification)
                .delete(handlers::delete_notification),
        )
        .with_state(service)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::auth::model::AuthenticatedUser;
    use crate::modules::push::memory::RecordingNotifier;
    use crate::shared::test_helpers::{administrative, commercial, with_user};
    use axum_test::TestServer;
    use serde_json::json;
    use sqlx::postgres::PgPoolOptions;

    fn server(user: AuthenticatedUser, notifier: Arc<RecordingNotifier>) -> TestServer {
        let pool = PgPoolOptions::new()
            .connect_lazy("postgres://localhost/unused")
            .unwrap();
        let app = routes(Arc::new(NotificationService::new(pool, notifier)));
        TestServer::new(with_user(app, user)).unwrap()
    }

    #[tokio::test]
    async fn test_only_administrative_staff_send_notifications() {
        let notifier = Arc::new(RecordingNotifier::new());
        let server = server(commercial(), notifier.clone());

        let response = server
            .post("/api/notifications")
            .json(&json!({ "user_id": 3, "message": "Report 7 is ready" }))
            .await;

        response.assert_status_forbidden();
        assert!(notifier.sent().is_empty());
    }

    #[tokio::test]
    async fn test_only_administrative_staff_edit_notifications() {
        let server = server(commercial(), Arc::new(RecordingNotifier::new()));

        server
            .put("/api/notifications/5")
            .json(&json!({ "message": "Report 7 was revised" }))
            .await
            .assert_status_forbidden();
        server
            .patch("/api/notifications/5")
            .json(&json!({ "complaint_id": null }))
            .await
            .assert_status_forbidden();
    }

    #[tokio::test]
    async fn test_edit_rejects_empty_message() {
        let server = server(administrative(), Arc::new(RecordingNotifier::new()));

        let response = server
            .put("/api/notifications/5")
            .json(&json!({ "message": "" }))
            .await;

        response.assert_status_bad_request();
        let body: serde_json::Value = response.json();
        assert_eq!(body["success"], json!(false));
    }
}
