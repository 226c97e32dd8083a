//! Modules layer - Infrastructure components for external integrations
//!
//! Contains adapters for object storage and mobile push delivery.

pub mod push;
pub mod storage;
