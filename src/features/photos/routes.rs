use std::sync::Arc;

use axum::{extract::DefaultBodyLimit, routing::get, Router};

use crate::features::photos::handlers;
use crate::features::photos::services::PhotoService;
use crate::shared::constants::MAX_PHOTO_SIZE;

/// Multipart framing on top of the photo itself
const FORM_OVERHEAD: usize = 64 * 1024;

pub fn routes(service: Arc<PhotoService>) -> Router {
    Router::new()
        .route(
            "/api/photos",
            get(handlers::list_photos).post(handlers::upload_photo),
        )
        .route(
            "/api/photos/{id}",
            get(handlers::get_photo).delete(handlers::delete_photo),
        )
        .layer(DefaultBodyLimit::max(MAX_PHOTO_SIZE + FORM_OVERHEAD))
        .with_state(service)
}
