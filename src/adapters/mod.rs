//! Analysis client interfaces.
//!
//! Clients submit text to a claim/citation analysis service and return the
//! decoded result. The session only sees the `AnalysisClient` trait, so the
//! core can be exercised without any network transport.

pub mod http;
pub mod mock;

use async_trait::async_trait;
use tracing::debug;

use crate::config::{ResolvedConfig, ServiceMode};
use crate::domain::{DocumentResult, ScanResult};
use crate::error::AnalysisError;

// Re-export the client implementations
pub use http::HttpAnalysisClient;
pub use mock::MockAnalysisClient;

/// Trait for claim/citation analysis backends
#[async_trait]
pub trait AnalysisClient: Send + Sync {
    /// Human-readable client name
    fn name(&self) -> &str;

    /// Analyze `text` and return its claims and citations
    async fn analyze(&self, text: &str) -> Result<DocumentResult, AnalysisError>;
}

/// Decode a service response body
///
/// The body must be a `ScanResult` envelope; anything else is reported as
/// a malformed response and nothing from it is kept.
pub fn parse_scan_response(body: &str) -> Result<DocumentResult, AnalysisError> {
    let scan: ScanResult = serde_json::from_str(body)
        .map_err(|e| AnalysisError::MalformedResponse(e.to_string()))?;

    debug!(
        claims = scan.document.claims.len(),
        citations = scan.document.citations.len(),
        "Decoded analysis response"
    );

    Ok(scan.document)
}

/// Build the client selected by the configuration
pub fn build_client(config: &ResolvedConfig) -> Box<dyn AnalysisClient> {
    match config.service.mode {
        ServiceMode::Mock => Box::new(MockAnalysisClient::new()),
        ServiceMode::Http => Box::new(HttpAnalysisClient::new(
            config.service.endpoint.clone(),
            config.service.timeout(),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_response() {
        let body = r#"{"document": {"claims": {}, "citations": {}}}"#;
        let document = parse_scan_response(body).unwrap();
        assert!(document.is_empty());
    }

    #[test]
    fn test_parse_rejects_wrong_shape() {
        let result = parse_scan_response(r#"{"claims": {}}"#);
        assert!(matches!(result, Err(AnalysisError::MalformedResponse(_))));

        let result = parse_scan_response("<html>502 Bad Gateway</html>");
        assert!(matches!(result, Err(AnalysisError::MalformedResponse(_))));
    }

    #[test]
    fn test_parse_rejects_bad_offsets() {
        let body = r#"{"document": {"claims": {"a": {"start_index": -1, "end_index": 2}}, "citations": {}}}"#;
        assert!(matches!(
            parse_scan_response(body),
            Err(AnalysisError::MalformedResponse(_))
        ));
    }
}
