//! Highlighted document view.

use crate::core::Segment;
use crate::domain::ClaimId;

pub const CITED_MARK: &str = "✓";
pub const UNCITED_MARK: &str = "✗";

/// Render segments as text, bracketing each claim
///
/// Claims render as `[text](id ✓)`; the selected claim gets double brackets.
pub fn render_document(segments: &[Segment<'_>], selected: Option<&ClaimId>) -> String {
    let mut out = String::new();

    for segment in segments {
        let Some(id) = segment.claim_id else {
            out.push_str(segment.text);
            continue;
        };

        let mark = if segment.has_citations { CITED_MARK } else { UNCITED_MARK };
        if selected == Some(id) {
            out.push_str(&format!("[[{}]]({} {})", segment.text, id, mark));
        } else {
            out.push_str(&format!("[{}]({} {})", segment.text, id, mark));
        }
    }

    out
}
