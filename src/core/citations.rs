//! Citation lookup for a single claim.

use serde::Serialize;

use crate::domain::{Citation, CitationId, CitationMap, Claim};

/// A claim's citation reference joined with the citation record
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResolvedCitation<'a> {
    pub citation_id: &'a CitationId,
    pub snippet: &'a str,
    pub citation: &'a Citation,
}

/// Resolve a claim's citation references against the citation map
///
/// References to citations missing from the map are skipped. Order follows
/// `relevant_citations`.
pub fn resolve_citations<'a>(claim: &'a Claim, citations: &'a CitationMap) -> Vec<ResolvedCitation<'a>> {
    claim
        .relevant_citations
        .iter()
        .filter_map(|reference| {
            citations
                .get(&reference.citation_id)
                .map(|citation| ResolvedCitation {
                    citation_id: &reference.citation_id,
                    snippet: &reference.snippet,
                    citation,
                })
        })
        .collect()
}
