//! Notifications to quality officers, mirrored to their device via push.

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use services::NotificationService;
