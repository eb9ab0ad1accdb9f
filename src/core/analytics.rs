//! Citation coverage summary for an analysis result.

use std::collections::{BTreeMap, BTreeSet};

use serde::Serialize;

use crate::domain::{CitationId, DocumentResult};

/// Aggregate numbers shown above the claim views
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AnalysisSummary {
    pub total_claims: usize,
    /// Claims with at least one citation reference
    pub cited_claims: usize,
    pub uncited_claims: usize,
    /// Rounded share of cited claims, 0 when there are no claims
    pub coverage_percent: u32,
    /// Distinct citations referenced by any claim and present in the result
    pub source_count: usize,
    /// Referenced citations per source tag
    pub tag_counts: BTreeMap<String, usize>,
}

/// Summarize claim coverage and citation sources
pub fn summarize(document: &DocumentResult) -> AnalysisSummary {
    let mut sources: BTreeSet<&CitationId> = BTreeSet::new();
    let mut cited_claims = 0;

    // Matches the ✓/✗ marks: a reference counts even when its id is missing
    for claim in document.claims.values() {
        if claim.has_citations() {
            cited_claims += 1;
        }
        for reference in &claim.relevant_citations {
            if document.citations.contains_key(&reference.citation_id) {
                sources.insert(&reference.citation_id);
            }
        }
    }

    let mut tag_counts = BTreeMap::new();
    for citation in sources.iter().filter_map(|id| document.citation(id)) {
        for tag in &citation.tags {
            *tag_counts.entry(tag.clone()).or_insert(0) += 1;
        }
    }

    let total_claims = document.claims.len();

    AnalysisSummary {
        total_claims,
        cited_claims,
        uncited_claims: total_claims - cited_claims,
        coverage_percent: coverage_percent(cited_claims, total_claims),
        source_count: sources.len(),
        tag_counts,
    }
}

fn coverage_percent(cited: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    ((cited as f64 / total as f64) * 100.0).round() as u32
}
