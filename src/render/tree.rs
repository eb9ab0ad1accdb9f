//! Claim tree view.

use crate::core::{walk, TreeEntry};
use crate::domain::{ClaimId, ClaimMap};

use super::document::{CITED_MARK, UNCITED_MARK};

/// Render the claim forest, one claim per line, indented by depth
pub fn render_tree(claims: &ClaimMap, selected: Option<&ClaimId>) -> String {
    let entries = walk(claims);
    let child_counts = shown_child_counts(&entries);
    let mut lines = Vec::with_capacity(entries.len());

    for (entry, child_count) in entries.iter().zip(child_counts) {
        let Some(claim) = claims.get(entry.id) else {
            continue;
        };

        let pointer = if selected == Some(entry.id) { ">" } else { "-" };
        let mark = if claim.has_citations() { CITED_MARK } else { UNCITED_MARK };

        let mut line = format!(
            "{}{} {} {} ({})",
            "  ".repeat(entry.depth),
            pointer,
            mark,
            claim.claim_text,
            entry.id
        );
        if child_count > 0 {
            line.push_str(&format!(" [{} supporting]", child_count));
        }
        lines.push(line);
    }

    lines.join("\n")
}

/// Number of rows nested directly under each row of a pre-order walk
///
/// A child already shown elsewhere (a cycle or a shared child) is not
/// nested again, so it does not count.
fn shown_child_counts(entries: &[TreeEntry<'_>]) -> Vec<usize> {
    let mut counts = vec![0; entries.len()];
    let mut open: Vec<usize> = Vec::new();

    for (i, entry) in entries.iter().enumerate() {
        while open.last().is_some_and(|&top| entries[top].depth >= entry.depth) {
            open.pop();
        }
        if let Some(&parent) = open.last() {
            counts[parent] += 1;
        }
        open.push(i);
    }

    counts
}
