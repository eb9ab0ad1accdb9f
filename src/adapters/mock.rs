//! Mock analysis client serving a fixed example response.
//!
//! Stands in for the real service: whatever text is submitted, the same
//! response (built for the first sample text) comes back.

use async_trait::async_trait;
use tracing::info;

use super::{parse_scan_response, AnalysisClient};
use crate::domain::DocumentResult;
use crate::error::AnalysisError;

/// Example response matching the first sample text
pub const EXAMPLE_RESPONSE: &str = include_str!("../../data/example_response.json");

/// Client that returns a canned response body
pub struct MockAnalysisClient {
    body: String,
}

impl Default for MockAnalysisClient {
    fn default() -> Self {
        Self::new()
    }
}

impl MockAnalysisClient {
    /// Create a mock client serving the bundled example response
    pub fn new() -> Self {
        Self::with_body(EXAMPLE_RESPONSE)
    }

    /// Create a mock client serving a custom response body
    pub fn with_body(body: impl Into<String>) -> Self {
        Self { body: body.into() }
    }
}

#[async_trait]
impl AnalysisClient for MockAnalysisClient {
    fn name(&self) -> &str {
        "mock"
    }

    async fn analyze(&self, text: &str) -> Result<DocumentResult, AnalysisError> {
        info!(chars = text.chars().count(), "Serving example analysis response");
        parse_scan_response(&self.body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{root_claims, segment_document};
    use crate::session::samples::SAMPLE_TEXTS;

    #[tokio::test]
    async fn test_example_response_decodes() {
        let client = MockAnalysisClient::new();
        assert_eq!(client.name(), "mock");

        let document = client.analyze("anything").await.unwrap();
        assert_eq!(document.claims.len(), 4);
        assert_eq!(document.citations.len(), 3);
        assert_eq!(root_claims(&document.claims).len(), 1);
    }

    #[tokio::test]
    async fn test_example_response_fits_first_sample() {
        let document = MockAnalysisClient::new().analyze("").await.unwrap();
        let text = SAMPLE_TEXTS[0];

        let segments = segment_document(text, &document);
        let rebuilt: String = segments.iter().map(|s| s.text).collect();
        assert_eq!(rebuilt, text);
        assert_eq!(segments.iter().filter(|s| s.is_claim()).count(), 4);
        assert!(segments[0].text.starts_with("The Eiffel Tower"));
    }

    #[tokio::test]
    async fn test_custom_body_errors_propagate() {
        let client = MockAnalysisClient::with_body("not json");
        let result = client.analyze("text").await;
        assert!(matches!(result, Err(AnalysisError::MalformedResponse(_))));
    }
}
