use crate::features::auth::handler;
use axum::{routing::get, Router};

/// Protected auth routes (require JWT authentication)
pub fn protected_routes() -> Router {
    Router::new().route("/api/auth/me", get(handler::get_me))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::access::Role;
    use crate::features::auth::model::AuthenticatedUser;
    use crate::shared::test_helpers::with_user;
    use axum_test::TestServer;
    use serde_json::Value;

    #[tokio::test]
    async fn test_me_reports_capabilities() {
        let app = with_user(
            protected_routes(),
            AuthenticatedUser::new(3, Role::QualityOfficer),
        );
        let server = TestServer::new(app).unwrap();

        let response = server.get("/api/auth/me").await;
        response.assert_status_ok();

        let body: Value = response.json();
        assert_eq!(body["data"]["user_id"], 3);
        assert_eq!(body["data"]["role"], "quality_officer");
        assert_eq!(body["data"]["can_validate"], true);
        assert_eq!(body["data"]["can_assign"], false);
    }

    #[tokio::test]
    async fn test_me_requires_authentication() {
        let server = TestServer::new(protected_routes()).unwrap();
        let response = server.get("/api/auth/me").await;
        response.assert_status_unauthorized();
    }
}
