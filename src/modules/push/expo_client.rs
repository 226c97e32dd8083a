use async_trait::async_trait;
use serde::Deserialize;

use super::{PushError, PushMessage, PushNotifier};
use crate::core::config::PushConfig;

/// Ticket returned by the Expo push API for a single message
#[derive(Debug, Deserialize)]
struct ExpoTicket {
    status: String,
    #[serde(default)]
    message: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ExpoResponse {
    #[serde(default)]
    data: Option<ExpoTicket>,
    #[serde(default)]
    errors: Option<serde_json::Value>,
}

/// Client for the Expo push API
pub struct ExpoPushClient {
    http_client: reqwest::Client,
    url: String,
    access_token: Option<String>,
}

impl ExpoPushClient {
    pub fn new(config: &PushConfig) -> Result<Self, PushError> {
        let http_client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| PushError::Transport(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            http_client,
            url: config.expo_push_url.clone(),
            access_token: config.access_token.clone(),
        })
    }
}

fn ticket_result(response: ExpoResponse) -> Result<(), PushError> {
    if let Some(errors) = response.errors {
        return Err(PushError::Rejected(errors.to_string()));
    }

    match response.data {
        Some(ticket) if ticket.status == "ok" => Ok(()),
        Some(ticket) => Err(PushError::Rejected(
            ticket.message.unwrap_or(ticket.status),
        )),
        None => Err(PushError::Rejected("Unexpected response".to_string())),
    }
}

#[async_trait]
impl PushNotifier for ExpoPushClient {
    async fn send(&self, message: &PushMessage) -> Result<(), PushError> {
        let mut request = self
            .http_client
            .post(&self.url)
            .header(reqwest::header::ACCEPT, "application/json")
            .json(message);

        if let Some(token) = &self.access_token {
            request = request.bearer_auth(token);
        }

        let response = request
            .send()
            .await
            .map_err(|e| PushError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(PushError::Http {
                status: status.as_u16(),
                body,
            });
        }

        let body = response
            .json::<ExpoResponse>()
            .await
            .map_err(|e| PushError::Transport(format!("Invalid response body: {}", e)))?;

        ticket_result(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(raw: &str) -> ExpoResponse {
        serde_json::from_str(raw).unwrap()
    }

    #[test]
    fn test_ok_ticket() {
        let response = parse(r#"{"data":{"status":"ok","id":"XXXX"}}"#);
        assert!(ticket_result(response).is_ok());
    }

    #[test]
    fn test_error_ticket() {
        let response = parse(
            r#"{"data":{"status":"error","message":"\"ExponentPushToken[x]\" is not a registered push notification recipient","details":{"error":"DeviceNotRegistered"}}}"#,
        );
        let err = ticket_result(response).unwrap_err();
        assert!(matches!(err, PushError::Rejected(msg) if msg.contains("not a registered")));
    }

    #[test]
    fn test_request_errors() {
        let response = parse(r#"{"errors":[{"code":"VALIDATION_ERROR","message":"bad"}]}"#);
        assert!(matches!(
            ticket_result(response),
            Err(PushError::Rejected(_))
        ));
    }
}
