//! Session state and its single update function.
//!
//! Every user action is an `Action` applied to an immutable `SessionState`,
//! producing the next state. Nothing here performs I/O; the driver supplies
//! request ids and timestamps inside the actions.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use uuid::Uuid;

use super::samples::{sample, SAMPLE_TEXTS};
use crate::domain::{Claim, ClaimId, DocumentResult};
use crate::error::AnalysisError;

/// Which claim view is shown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    /// Nested claim tree
    #[default]
    Tree,
    /// Analyzed text with claims highlighted
    Document,
}

impl View {
    pub fn toggled(self) -> Self {
        match self {
            View::Tree => View::Document,
            View::Document => View::Tree,
        }
    }
}

impl std::str::FromStr for View {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> anyhow::Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "tree" | "claims" => Ok(View::Tree),
            "document" | "doc" | "text" => Ok(View::Document),
            _ => anyhow::bail!("Unknown view: {}", s),
        }
    }
}

/// One successful analysis, kept until the next one succeeds
#[derive(Debug, Clone, PartialEq)]
pub struct Analysis {
    pub request_id: Uuid,
    /// Text the offsets refer to (the input may have been edited since)
    pub text: String,
    pub document: DocumentResult,
    pub completed_at: DateTime<Utc>,
}

/// The analysis currently awaiting a response
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingRequest {
    pub request_id: Uuid,
    pub text: String,
}

/// A user action or analysis outcome
#[derive(Debug, Clone)]
pub enum Action {
    /// Replace the input text
    EditText(String),
    /// Replace the input text with the next sample
    LoadSample,
    /// Start an analysis of the current input
    Submit { request_id: Uuid },
    /// An analysis finished
    Completed {
        request_id: Uuid,
        result: Result<DocumentResult, AnalysisError>,
        at: DateTime<Utc>,
    },
    /// Select a claim from either view
    SelectClaim(ClaimId),
    ClearSelection,
    SetView(View),
    ToggleView,
    ToggleHelp,
}

/// Everything the views need to render a session
#[derive(Debug, Clone)]
pub struct SessionState {
    /// Current input text
    pub text: String,
    /// Index of the sample `LoadSample` will use next
    pub next_sample: usize,
    pub analysis: Option<Arc<Analysis>>,
    pub pending: Option<PendingRequest>,
    pub selected: Option<ClaimId>,
    pub view: View,
    pub help_open: bool,
    /// Error from the last attempt, if it failed
    pub error: Option<AnalysisError>,
    pub max_input_bytes: usize,
}

impl SessionState {
    pub fn new(max_input_bytes: usize) -> Self {
        Self {
            text: String::new(),
            next_sample: 0,
            analysis: None,
            pending: None,
            selected: None,
            view: View::default(),
            help_open: false,
            error: None,
            max_input_bytes,
        }
    }

    /// Whether an analysis is in flight
    pub fn is_busy(&self) -> bool {
        self.pending.is_some()
    }

    /// Current analysis result, if any
    pub fn document(&self) -> Option<&DocumentResult> {
        self.analysis.as_ref().map(|a| &a.document)
    }

    /// The selected claim, if it exists in the current result
    pub fn selected_claim(&self) -> Option<(&ClaimId, &Claim)> {
        let id = self.selected.as_ref()?;
        self.document()?.claims.get_key_value(id)
    }

    /// Produce the state that follows `action`
    pub fn apply(&self, action: Action) -> SessionState {
        let mut next = self.clone();

        match action {
            Action::EditText(text) => {
                next.text = text;
            }
            Action::LoadSample => {
                next.text = sample(self.next_sample).to_string();
                next.next_sample = (self.next_sample + 1) % SAMPLE_TEXTS.len();
            }
            Action::Submit { request_id } => match self.validate_submit() {
                Ok(()) => {
                    next.error = None;
                    next.pending = Some(PendingRequest {
                        request_id,
                        text: self.text.clone(),
                    });
                }
                Err(e) => next.error = Some(e),
            },
            Action::Completed {
                request_id,
                result,
                at,
            } => {
                let pending = match &self.pending {
                    Some(p) if p.request_id == request_id => p,
                    // Stale or unknown completion
                    _ => return next,
                };

                match result {
                    Ok(document) => {
                        next.analysis = Some(Arc::new(Analysis {
                            request_id,
                            text: pending.text.clone(),
                            document,
                            completed_at: at,
                        }));
                        next.selected = None;
                        next.error = None;
                    }
                    Err(e) => next.error = Some(e),
                }
                next.pending = None;
            }
            Action::SelectClaim(id) => {
                let known = self.document().is_some_and(|d| d.claims.contains_key(&id));
                if known {
                    next.selected = Some(id);
                }
            }
            Action::ClearSelection => next.selected = None,
            Action::SetView(view) => next.view = view,
            Action::ToggleView => next.view = self.view.toggled(),
            Action::ToggleHelp => next.help_open = !self.help_open,
        }

        next
    }

    fn validate_submit(&self) -> Result<(), AnalysisError> {
        if self.is_busy() {
            return Err(AnalysisError::Busy);
        }
        // Whitespace-only input counts as empty
        if self.text.trim().is_empty() {
            return Err(AnalysisError::EmptyInput);
        }
        if self.text.len() > self.max_input_bytes {
            return Err(AnalysisError::InputTooLarge {
                actual: self.text.len(),
                limit: self.max_input_bytes,
            });
        }
        Ok(())
    }
}
