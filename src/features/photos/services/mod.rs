mod photo_service;
mod photo_store;

pub use photo_service::PhotoService;
pub use photo_store::{PhotoStore, PhotoUpload};
