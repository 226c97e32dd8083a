use async_trait::async_trait;
use std::sync::Mutex;

use super::{PushError, PushMessage, PushNotifier};

/// Keeps every delivered message; optionally fails every send
#[derive(Default)]
pub struct RecordingNotifier {
    sent: Mutex<Vec<PushMessage>>,
    fail: bool,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub fn sent(&self) -> Vec<PushMessage> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl PushNotifier for RecordingNotifier {
    async fn send(&self, message: &PushMessage) -> Result<(), PushError> {
        if self.fail {
            return Err(PushError::Transport("connection reset".to_string()));
        }
        self.sent.lock().unwrap().push(message.clone());
        Ok(())
    }
}
