//! citerite - Claim and citation viewer
//!
//! Submits text to a claim/citation analysis service and renders the
//! result: the text with claims highlighted, the claim hierarchy, and the
//! citations supporting each claim.
//!
//! # Architecture
//!
//! The analysis itself happens in an external service behind the
//! `AnalysisClient` trait. Everything else is pure:
//! - Segmentation maps claim offsets onto the analyzed text
//! - The hierarchy rebuilds parent/child claim trees from a flat map
//! - Session state changes only through `SessionState::apply`
//!
//! # Modules
//!
//! - `adapters`: Analysis clients (HTTP, mock)
//! - `core`: Segmenter, hierarchy, citation lookup, analytics
//! - `domain`: Data structures (Claim, Citation, DocumentResult)
//! - `session`: Session state, actions and the async driver
//! - `render`: Plain-text views
//! - `cli`: Command-line interface
//!
//! # Usage
//!
//! ```bash
//! # Analyze a sample text and print both views
//! citerite scan --sample 1
//!
//! # Analyze piped text and show one claim's citations
//! cat essay.txt | citerite scan --view document --select claim-2
//!
//! # Interactive session
//! citerite session
//! ```

pub mod adapters;
pub mod cli;
pub mod config;
pub mod core;
pub mod domain;
pub mod error;
pub mod render;
pub mod session;

// Re-export main types at crate root for convenience
pub use crate::adapters::{AnalysisClient, HttpAnalysisClient, MockAnalysisClient};
pub use crate::core::{children, resolve_citations, root_claims, segment, segment_document, walk, Segment};
pub use domain::{Citation, CitationId, Claim, ClaimId, DocumentResult};
pub use error::AnalysisError;
pub use session::{Action, Session, SessionState, View};
