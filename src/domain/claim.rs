//! Claims extracted from analyzed text.

use serde::{Deserialize, Serialize};

use super::citation::CitationId;
use super::{nullable_string, nullable_vec};

/// Claim identifier (the key of the claim in the result map)
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ClaimId(String);

impl ClaimId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the raw string value
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ClaimId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for ClaimId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// A reference from a claim to a citation, with the matching snippet
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RelevantCitation {
    /// Citation this reference points at
    pub citation_id: CitationId,

    /// Excerpt of the citation that supports the claim
    #[serde(default, deserialize_with = "nullable_string")]
    pub snippet: String,
}

/// A claim located in the analyzed text
///
/// Offsets are half-open char offsets into the analyzed text. They are not
/// validated on decode; see `core::segmenter` for how bad spans are handled.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Claim {
    /// Start char offset (inclusive)
    pub start_index: usize,

    /// End char offset (exclusive)
    pub end_index: usize,

    /// Normalized statement of the claim
    #[serde(default, deserialize_with = "nullable_string")]
    pub claim_text: String,

    /// Document the claim was extracted from
    #[serde(default, deserialize_with = "nullable_string")]
    pub document_id: String,

    /// Broader claims this one supports
    #[serde(default, deserialize_with = "nullable_vec")]
    pub parent_claim_ids: Vec<ClaimId>,

    /// Narrower claims supporting this one
    #[serde(default, deserialize_with = "nullable_vec")]
    pub children_claim_ids: Vec<ClaimId>,

    /// Citations matched to this claim
    #[serde(default, deserialize_with = "nullable_vec")]
    pub relevant_citations: Vec<RelevantCitation>,
}

impl Claim {
    /// Create a claim spanning `[start_index, end_index)` with no links
    pub fn new(start_index: usize, end_index: usize, claim_text: impl Into<String>) -> Self {
        Self {
            start_index,
            end_index,
            claim_text: claim_text.into(),
            document_id: String::new(),
            parent_claim_ids: Vec::new(),
            children_claim_ids: Vec::new(),
            relevant_citations: Vec::new(),
        }
    }

    pub fn with_parents<I, S>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<ClaimId>,
    {
        self.parent_claim_ids = ids.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_children<I, S>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<ClaimId>,
    {
        self.children_claim_ids = ids.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_citation(mut self, citation_id: &str, snippet: &str) -> Self {
        self.relevant_citations.push(RelevantCitation {
            citation_id: CitationId::from(citation_id),
            snippet: snippet.to_string(),
        });
        self
    }

    /// Whether the claim references at least one citation
    pub fn has_citations(&self) -> bool {
        !self.relevant_citations.is_empty()
    }
}
