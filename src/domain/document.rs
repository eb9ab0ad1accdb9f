//! Full analysis output for one submitted text.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::citation::{Citation, CitationId};
use super::claim::{Claim, ClaimId};

/// Claims keyed by id, iterated in ascending id order
pub type ClaimMap = BTreeMap<ClaimId, Claim>;

/// Citations keyed by id
pub type CitationMap = BTreeMap<CitationId, Citation>;

/// Claims and citations produced by one analysis
///
/// Immutable once received; a new analysis replaces it wholesale.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DocumentResult {
    #[serde(default)]
    pub claims: ClaimMap,

    #[serde(default)]
    pub citations: CitationMap,
}

impl DocumentResult {
    pub fn new(claims: ClaimMap, citations: CitationMap) -> Self {
        Self { claims, citations }
    }

    /// Look up a claim by id
    pub fn claim(&self, id: &ClaimId) -> Option<&Claim> {
        self.claims.get(id)
    }

    /// Look up a citation by id
    pub fn citation(&self, id: &CitationId) -> Option<&Citation> {
        self.citations.get(id)
    }

    pub fn is_empty(&self) -> bool {
        self.claims.is_empty()
    }
}

/// Response envelope returned by the analysis service
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanResult {
    pub document: DocumentResult,
}
