use crate::features::users::handlers;
use crate::features::users::services::UserService;
use axum::{
    routing::{get, put},
    Router,
};
use std::sync::Arc;

pub fn routes(service: Arc<UserService>) -> Router {
    Router::new()
        .route(
            "/api/quality-officers",
            get(handlers::list_quality_officers),
        )
        .route("/api/users/push-token", put(handlers::update_push_token))
        .with_state(service)
}
