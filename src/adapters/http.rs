//! HTTP analysis client.
//!
//! Endpoint: POST {endpoint} with body `{"text": "..."}`
//! Response: `{"document": {"claims": {...}, "citations": {...}}}`

use std::time::Duration;

use async_trait::async_trait;
use serde::Serialize;
use tracing::{debug, instrument, warn};

use super::{parse_scan_response, AnalysisClient};
use crate::domain::DocumentResult;
use crate::error::AnalysisError;

/// Request body for the scan endpoint
#[derive(Debug, Serialize)]
struct ScanRequest<'a> {
    text: &'a str,
}

/// Client for a remote analysis service
pub struct HttpAnalysisClient {
    endpoint: String,
    timeout: Duration,
    client: reqwest::Client,
}

impl HttpAnalysisClient {
    /// Create a new client for `endpoint`
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Self {
        Self {
            endpoint: endpoint.into(),
            timeout,
            client: reqwest::Client::new(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl AnalysisClient for HttpAnalysisClient {
    fn name(&self) -> &str {
        "http"
    }

    #[instrument(skip(self, text), fields(endpoint = %self.endpoint))]
    async fn analyze(&self, text: &str) -> Result<DocumentResult, AnalysisError> {
        let response = self
            .client
            .post(&self.endpoint)
            .timeout(self.timeout)
            .json(&ScanRequest { text })
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    AnalysisError::Timeout(self.timeout.as_secs())
                } else {
                    AnalysisError::Service(format!("request failed: {}", e))
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!(%status, "Analysis service returned an error status");
            return Err(AnalysisError::Service(format!(
                "{}: {}",
                status,
                body.trim()
            )));
        }

        let body = response
            .text()
            .await
            .map_err(|e| AnalysisError::Service(format!("failed to read response: {}", e)))?;
        debug!(bytes = body.len(), "Received analysis response");

        parse_scan_response(&body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        let client = HttpAnalysisClient::new("http://localhost:8000/scan", Duration::from_secs(5));
        assert_eq!(client.name(), "http");
        assert_eq!(client.endpoint(), "http://localhost:8000/scan");
    }

    #[test]
    fn test_request_body_shape() {
        let json = serde_json::to_string(&ScanRequest { text: "hello" }).unwrap();
        assert_eq!(json, r#"{"text":"hello"}"#);
    }

    // Round trips against a live socket are in tests/http_client.rs
}
