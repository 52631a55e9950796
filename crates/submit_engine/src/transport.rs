use std::time::Duration;

use reqwest::header::CONTENT_TYPE;
use submit_core::SubmissionPayload;

use crate::{FailureKind, SendError, SendReceipt};

pub const DEFAULT_ENDPOINT: &str = "https://eof2r4gt8aplhsc.m.pipedream.net";

#[derive(Debug, Clone)]
pub struct TransportSettings {
    pub endpoint: String,
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
}

impl Default for TransportSettings {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(30),
        }
    }
}

#[async_trait::async_trait]
pub trait Transport: Send + Sync {
    async fn send(&self, payload: &SubmissionPayload) -> Result<SendReceipt, SendError>;
}

/// Posts the payload as JSON to the configured endpoint.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    settings: TransportSettings,
}

impl ReqwestTransport {
    pub fn new(settings: TransportSettings) -> Self {
        Self { settings }
    }

    pub fn endpoint(&self) -> &str {
        &self.settings.endpoint
    }

    fn build_client(&self) -> Result<reqwest::Client, SendError> {
        reqwest::Client::builder()
            .connect_timeout(self.settings.connect_timeout)
            .timeout(self.settings.request_timeout)
            .build()
            .map_err(|err| SendError::new(FailureKind::Network, err.to_string()))
    }
}

#[async_trait::async_trait]
impl Transport for ReqwestTransport {
    async fn send(&self, payload: &SubmissionPayload) -> Result<SendReceipt, SendError> {
        let body = serde_json::to_vec(payload)
            .map_err(|err| SendError::new(FailureKind::Serialize, err.to_string()))?;
        let client = self.build_client()?;

        let response = client
            .post(self.settings.endpoint.as_str())
            .header(CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let status = response.status();
        if !status.is_success() {
            let message = match status.canonical_reason() {
                Some(reason) => format!("HTTP {}: {}", status.as_u16(), reason),
                None => format!("HTTP {}", status.as_u16()),
            };
            return Err(SendError::new(
                FailureKind::HttpStatus(status.as_u16()),
                message,
            ));
        }

        // The body is optional; anything unreadable counts as a plain success.
        let body = response
            .bytes()
            .await
            .ok()
            .and_then(|bytes| serde_json::from_slice(&bytes).ok())
            .unwrap_or_else(|| serde_json::json!({ "success": true }));

        Ok(SendReceipt {
            status: status.as_u16(),
            body,
        })
    }
}

fn map_reqwest_error(err: reqwest::Error) -> SendError {
    if err.is_timeout() {
        return SendError::new(FailureKind::Timeout, err.to_string());
    }
    SendError::new(FailureKind::Network, err.to_string())
}
