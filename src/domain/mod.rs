//! Domain types for analysis results.
//!
//! This module contains the data structures returned by the analysis service:
//! - Claim: A statement located in the analyzed text by char offsets
//! - Citation: A source record that may support claims
//! - DocumentResult: The full analysis output

pub mod citation;
pub mod claim;
pub mod document;

// Re-export commonly used types
pub use citation::{Citation, CitationId};
pub use claim::{Claim, ClaimId, RelevantCitation};
pub use document::{ClaimMap, CitationMap, DocumentResult, ScanResult};

use serde::{Deserialize, Deserializer};

/// Deserialize a list that may be missing or `null` as an empty list
pub(crate) fn nullable_vec<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<Vec<T>>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// Deserialize a string that may be `null` as an empty string
pub(crate) fn nullable_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Option::unwrap_or_default)
}
