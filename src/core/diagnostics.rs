//! Irregularities in an analysis result that the views tolerate.
//!
//! None of these reject a result. They exist so the CLI can log what the
//! segmenter clamped or the hierarchy dropped.

use std::fmt;

use crate::domain::{CitationId, ClaimId, DocumentResult};

/// A single irregularity found in an analysis result
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Issue {
    /// Span ends past the end of the analyzed text
    SpanOutOfBounds { claim: ClaimId, end: usize, len: usize },
    /// Span ends before it starts
    InvertedSpan { claim: ClaimId, start: usize, end: usize },
    /// Span starts inside the previous claim's span
    OverlappingSpans { first: ClaimId, second: ClaimId },
    /// Child id not present in the claim map
    DanglingChild { claim: ClaimId, child: ClaimId },
    /// Parent id not present in the claim map
    DanglingParent { claim: ClaimId, parent: ClaimId },
    /// Child lists a parent that does not list it back
    NonMutualLink { parent: ClaimId, child: ClaimId },
    /// Citation reference not present in the citation map
    DanglingCitation { claim: ClaimId, citation: CitationId },
}

impl fmt::Display for Issue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Issue::SpanOutOfBounds { claim, end, len } => {
                write!(f, "claim {} ends at {} but text has {} chars", claim, end, len)
            }
            Issue::InvertedSpan { claim, start, end } => {
                write!(f, "claim {} has inverted span {}..{}", claim, start, end)
            }
            Issue::OverlappingSpans { first, second } => {
                write!(f, "claim {} overlaps claim {}", second, first)
            }
            Issue::DanglingChild { claim, child } => {
                write!(f, "claim {} lists unknown child {}", claim, child)
            }
            Issue::DanglingParent { claim, parent } => {
                write!(f, "claim {} lists unknown parent {}", claim, parent)
            }
            Issue::NonMutualLink { parent, child } => {
                write!(f, "claim {} names parent {} which does not list it", child, parent)
            }
            Issue::DanglingCitation { claim, citation } => {
                write!(f, "claim {} cites unknown citation {}", claim, citation)
            }
        }
    }
}

/// Collect every irregularity in `document` relative to the analyzed `text`
pub fn inspect(text: &str, document: &DocumentResult) -> Vec<Issue> {
    let len = text.chars().count();
    let mut issues = Vec::new();

    let mut by_start: Vec<(&ClaimId, usize, usize)> = Vec::with_capacity(document.claims.len());

    for (id, claim) in &document.claims {
        if claim.end_index < claim.start_index {
            issues.push(Issue::InvertedSpan {
                claim: id.clone(),
                start: claim.start_index,
                end: claim.end_index,
            });
        }
        if claim.end_index > len {
            issues.push(Issue::SpanOutOfBounds {
                claim: id.clone(),
                end: claim.end_index,
                len,
            });
        }
        by_start.push((id, claim.start_index, claim.end_index));

        for child in &claim.children_claim_ids {
            if !document.claims.contains_key(child) {
                issues.push(Issue::DanglingChild {
                    claim: id.clone(),
                    child: child.clone(),
                });
            }
        }

        for parent in &claim.parent_claim_ids {
            match document.claim(parent) {
                None => issues.push(Issue::DanglingParent {
                    claim: id.clone(),
                    parent: parent.clone(),
                }),
                Some(parent_claim) if !parent_claim.children_claim_ids.contains(id) => {
                    issues.push(Issue::NonMutualLink {
                        parent: parent.clone(),
                        child: id.clone(),
                    })
                }
                Some(_) => {}
            }
        }

        for reference in &claim.relevant_citations {
            if !document.citations.contains_key(&reference.citation_id) {
                issues.push(Issue::DanglingCitation {
                    claim: id.clone(),
                    citation: reference.citation_id.clone(),
                });
            }
        }
    }

    by_start.sort_by_key(|(_, start, _)| *start);
    let mut covered: Option<(&ClaimId, usize)> = None;
    for (id, start, end) in by_start {
        if let Some((previous, cursor)) = covered {
            if start < cursor {
                issues.push(Issue::OverlappingSpans {
                    first: previous.clone(),
                    second: id.clone(),
                });
            }
        }
        if covered.map_or(true, |(_, cursor)| end > cursor) {
            covered = Some((id, end));
        }
    }

    issues
}
