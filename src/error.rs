//! Errors for a single analysis attempt.
//!
//! Every variant is local to one attempt: the session records it and keeps
//! whatever result it already had.

use thiserror::Error;

/// Why an analysis attempt did not produce a result
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AnalysisError {
    #[error("Text cannot be empty")]
    EmptyInput,

    #[error("Input is too large: {actual} bytes > {limit} bytes")]
    InputTooLarge { actual: usize, limit: usize },

    #[error("An analysis is already in progress")]
    Busy,

    #[error("Analysis service error: {0}")]
    Service(String),

    #[error("Analysis timed out after {0}s")]
    Timeout(u64),

    #[error("Malformed analysis response: {0}")]
    MalformedResponse(String),
}

impl AnalysisError {
    /// Message suitable for showing next to the input
    ///
    /// Service and parse failures collapse to a generic message; the full
    /// `Display` form is meant for logs.
    pub fn user_message(&self) -> String {
        match self {
            AnalysisError::Service(_) | AnalysisError::Timeout(_) => {
                "An error occurred during text analysis".to_string()
            }
            AnalysisError::MalformedResponse(_) => {
                "Failed to parse the analysis results".to_string()
            }
            other => other.to_string(),
        }
    }

    /// Whether the error came from validating the input rather than the service
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            AnalysisError::EmptyInput | AnalysisError::InputTooLarge { .. } | AnalysisError::Busy
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_messages_hide_details() {
        let err = AnalysisError::Service("connection refused (os error 111)".to_string());
        assert_eq!(err.user_message(), "An error occurred during text analysis");
        assert!(err.to_string().contains("connection refused"));

        let err = AnalysisError::MalformedResponse("missing field `document`".to_string());
        assert_eq!(err.user_message(), "Failed to parse the analysis results");

        assert_eq!(AnalysisError::EmptyInput.user_message(), "Text cannot be empty");
        assert!(AnalysisError::Busy.is_validation());
        assert!(!AnalysisError::Timeout(30).is_validation());
    }
}
