//! Async session driver.
//!
//! Owns the analysis client and the current `SessionState`. Each user action
//! goes through `dispatch`; `analyze` runs one analysis round trip with a
//! timeout and feeds the outcome back as an `Action::Completed`.

use std::time::{Duration, Instant};

use chrono::Utc;
use sha2::{Digest, Sha256};
use tracing::{error, info, instrument, warn};
use uuid::Uuid;

use super::state::{Action, SessionState};
use crate::adapters::{build_client, AnalysisClient};
use crate::config::ResolvedConfig;
use crate::core::inspect;
use crate::error::AnalysisError;

/// Compute SHA256 of text for logging, in format "sha256:abc123..."
pub fn fingerprint(text: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(text.as_bytes());
    format!("sha256:{}", hex::encode(hasher.finalize()))
}

/// A viewing session bound to one analysis client
pub struct Session {
    state: SessionState,
    client: Box<dyn AnalysisClient>,
    timeout: Duration,
}

impl Session {
    /// Create a session with an explicit client
    pub fn new(client: Box<dyn AnalysisClient>, timeout: Duration, max_input_bytes: usize) -> Self {
        Self {
            state: SessionState::new(max_input_bytes),
            client,
            timeout,
        }
    }

    /// Create a session using the configured client
    pub fn from_config(config: &ResolvedConfig) -> Self {
        Self::new(
            build_client(config),
            config.service.timeout(),
            config.max_input_bytes,
        )
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn client_name(&self) -> &str {
        self.client.name()
    }

    /// Apply an action to the current state
    pub fn dispatch(&mut self, action: Action) -> &SessionState {
        self.state = self.state.apply(action);
        &self.state
    }

    /// Analyze the current input text
    ///
    /// On failure the error is recorded in the state and returned; the
    /// previous result stays in place.
    #[instrument(skip(self), fields(client = %self.client.name()))]
    pub async fn analyze(&mut self) -> Result<(), AnalysisError> {
        let request_id = Uuid::new_v4();
        self.dispatch(Action::Submit { request_id });

        let text = match &self.state.pending {
            Some(pending) if pending.request_id == request_id => pending.text.clone(),
            _ => {
                let err = self.state.error.clone().unwrap_or(AnalysisError::Busy);
                warn!(%request_id, error = %err, "Analysis not started");
                return Err(err);
            }
        };

        info!(
            %request_id,
            input_sha256 = %fingerprint(&text),
            chars = text.chars().count(),
            "Submitting text for analysis"
        );

        let started = Instant::now();
        let result = match tokio::time::timeout(self.timeout, self.client.analyze(&text)).await {
            Ok(result) => result,
            Err(_) => Err(AnalysisError::Timeout(self.timeout.as_secs())),
        };
        let duration_ms = started.elapsed().as_millis() as u64;

        let outcome = match &result {
            Ok(document) => {
                info!(
                    %request_id,
                    claims = document.claims.len(),
                    citations = document.citations.len(),
                    duration_ms,
                    "Analysis completed"
                );
                for issue in inspect(&text, document) {
                    warn!(%request_id, "Irregular analysis data: {}", issue);
                }
                Ok(())
            }
            Err(e) => {
                error!(%request_id, error = %e, duration_ms, "Analysis failed");
                Err(e.clone())
            }
        };

        self.dispatch(Action::Completed {
            request_id,
            result,
            at: Utc::now(),
        });

        outcome
    }
}
