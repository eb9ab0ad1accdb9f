//! Citation panel and coverage summary.

use crate::core::{children, parents, resolve_citations, AnalysisSummary};
use crate::domain::{Claim, ClaimId, DocumentResult};

/// Characters of citation full text shown under each citation
const FULLTEXT_PREVIEW_CHARS: usize = 300;

/// Render the selected claim with its supporting citations and related claims
pub fn render_citation_panel(document: &DocumentResult, selected: Option<&ClaimId>) -> String {
    let Some((id, claim)) = selected.and_then(|id| document.claims.get_key_value(id)) else {
        return "Select a claim to view its citations".to_string();
    };

    let parent_ids = parents(&document.claims, id);
    let child_ids = children(&document.claims, id);

    let mut badges = vec![if claim.has_citations() { "Cited" } else { "Uncited" }];
    if !parent_ids.is_empty() || !child_ids.is_empty() {
        badges.push("Has Relationships");
    }

    let mut out = format!(
        "Claim (ID: {})\n  {}\n  [{}]\n",
        id,
        claim.claim_text,
        badges.join("] [")
    );

    if claim.has_citations() {
        out.push_str(&render_citations(claim, document));
    } else {
        out.push_str(
            "\nUncited Claim\n  This claim doesn't have any supporting citations. \
             Consider reviewing it for accuracy.\n",
        );
    }

    if !parent_ids.is_empty() || !child_ids.is_empty() {
        out.push_str("\nClaim Relationships\n");
        out.push_str(&render_related("Parent claims", &parent_ids, document));
        out.push_str(&render_related("Child claims", &child_ids, document));
    }

    out
}

fn render_citations(claim: &Claim, document: &DocumentResult) -> String {
    let resolved = resolve_citations(claim, &document.citations);
    let missing = claim.relevant_citations.len() - resolved.len();

    let mut out = String::from("\nSupporting Citations\n");
    for entry in resolved {
        out.push_str(&format!("\n  Citation Match (ID: {})\n", entry.citation_id));
        let snippet = if entry.snippet.is_empty() {
            "No snippet available"
        } else {
            entry.snippet
        };
        out.push_str(&format!("    Cited text: {}\n", snippet));
        if !entry.citation.tags.is_empty() {
            out.push_str(&format!("    Tags: {}\n", entry.citation.tags.join(", ")));
        }
        if !entry.citation.summary.is_empty() {
            out.push_str(&format!("    Summary: {}\n", entry.citation.summary));
        }
        if !entry.citation.fulltext.is_empty() {
            out.push_str(&format!(
                "    Excerpt: {}\n",
                entry.citation.excerpt(FULLTEXT_PREVIEW_CHARS)
            ));
        }
        if !entry.citation.link.is_empty() {
            out.push_str(&format!("    Source: {}\n", entry.citation.link));
        }
    }

    if missing > 0 {
        out.push_str(&format!(
            "\n  {} referenced source(s) missing from the result\n",
            missing
        ));
    }

    out
}

fn render_related(title: &str, ids: &[&ClaimId], document: &DocumentResult) -> String {
    if ids.is_empty() {
        return String::new();
    }

    let mut out = format!("  {}:\n", title);
    for id in ids {
        if let Some(claim) = document.claim(id) {
            out.push_str(&format!("    - {} ({})\n", claim.claim_text, id));
        }
    }
    out
}

/// Render the coverage numbers
pub fn render_summary(summary: &AnalysisSummary) -> String {
    let mut out = format!(
        "Claims: {} total, {} cited, {} uncited ({}% coverage)\nSources: {}",
        summary.total_claims,
        summary.cited_claims,
        summary.uncited_claims,
        summary.coverage_percent,
        summary.source_count
    );

    if !summary.tag_counts.is_empty() {
        let tags: Vec<String> = summary
            .tag_counts
            .iter()
            .map(|(tag, count)| format!("{} {}", tag, count))
            .collect();
        out.push_str(&format!(" ({})", tags.join(", ")));
    }

    out
}
