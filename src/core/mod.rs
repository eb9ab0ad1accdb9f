//! Core analysis-result logic.
//!
//! This module contains:
//! - Segmenter: Splits analyzed text into plain and claim segments
//! - Hierarchy: Root claims, children and cycle-safe tree walks
//! - Citations: Joins claim references with citation records
//! - Analytics: Citation coverage summary
//! - Diagnostics: Tolerated irregularities, for logging

pub mod analytics;
pub mod citations;
pub mod diagnostics;
pub mod hierarchy;
pub mod segmenter;

// Re-export commonly used types
pub use analytics::{summarize, AnalysisSummary};
pub use citations::{resolve_citations, ResolvedCitation};
pub use diagnostics::{inspect, Issue};
pub use hierarchy::{children, parents, root_claims, walk, TreeEntry};
pub use segmenter::{segment, segment_document, Segment};
