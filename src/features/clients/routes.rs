use std::sync::Arc;

use axum::{routing::get, Router};

use crate::features::clients::handlers;
use crate::features::clients::services::ClientService;

pub fn routes(service: Arc<ClientService>) -> Router {
    Router::new()
        .route(
            "/api/clients",
            get(handlers::list_clients).post(handlers::create_client),
        )
        .route(
            "/api/clients/{id}",
            get(handlers::get_client)
                .put(handlers::update_client)
                .delete(handlers::delete_client),
        )
        .with_state(service)
}
