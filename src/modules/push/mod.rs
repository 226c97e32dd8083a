//! Mobile push delivery.
//!
//! Pushes are best effort: [`dispatch`] hands the message to a spawned task
//! and only logs the outcome.

mod expo_client;

#[cfg(test)]
pub mod memory;

use async_trait::async_trait;
use serde::Serialize;
use std::sync::Arc;
use thiserror::Error;
use tokio::task::JoinHandle;

pub use expo_client::ExpoPushClient;

/// One push message in the Expo wire shape
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PushMessage {
    pub to: String,
    pub title: String,
    pub body: String,
    pub data: serde_json::Value,
}

#[derive(Debug, Error)]
pub enum PushError {
    #[error("Push request failed: {0}")]
    Transport(String),

    #[error("Push service returned HTTP {status}: {body}")]
    Http { status: u16, body: String },

    #[error("Push rejected: {0}")]
    Rejected(String),
}

#[async_trait]
pub trait PushNotifier: Send + Sync {
    async fn send(&self, message: &PushMessage) -> Result<(), PushError>;
}

/// Send `message` on a background task. Failures are logged, never returned.
pub fn dispatch(notifier: Arc<dyn PushNotifier>, message: PushMessage) -> JoinHandle<()> {
    tokio::spawn(async move {
        match notifier.send(&message).await {
            Ok(()) => tracing::info!("Push notification delivered to {}", message.to),
            Err(e) => tracing::error!("Push notification to {} failed: {}", message.to, e),
        }
    })
}
