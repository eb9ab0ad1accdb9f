//! Document segmentation for claim highlighting.
//!
//! Splits the analyzed text into an ordered sequence of plain and
//! claim-annotated segments whose concatenation is the original text.
//!
//! # Span policy
//!
//! - **Char offsets**: claim offsets count chars, not bytes. Slicing happens on
//!   char boundaries only.
//! - **Clamping**: offsets past the end of the text are clamped to its length,
//!   and `end_index < start_index` is read as a zero-length span.
//! - **Cursor never rewinds**: a claim starting inside text already covered is
//!   trimmed to the uncovered part. A claim with nothing left emits no segment.
//!
//! Under this policy the round-trip holds for any claim set.

use serde::Serialize;

use crate::domain::{Claim, ClaimId, DocumentResult};

/// A contiguous slice of the analyzed text
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Segment<'a> {
    /// The slice itself
    pub text: &'a str,
    /// Start char offset in the analyzed text
    pub start: usize,
    /// End char offset (exclusive)
    pub end: usize,
    /// Claim covering this slice, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub claim_id: Option<&'a ClaimId>,
    /// Whether the covering claim references any citation
    pub has_citations: bool,
}

impl<'a> Segment<'a> {
    fn plain(text: &'a str, start: usize, end: usize) -> Self {
        Self {
            text,
            start,
            end,
            claim_id: None,
            has_citations: false,
        }
    }

    pub fn is_claim(&self) -> bool {
        self.claim_id.is_some()
    }
}

/// Byte offsets of every char boundary, including the end of the text
struct CharBoundaries {
    offsets: Vec<usize>,
}

impl CharBoundaries {
    fn new(text: &str) -> Self {
        let offsets = text
            .char_indices()
            .map(|(i, _)| i)
            .chain(std::iter::once(text.len()))
            .collect();
        Self { offsets }
    }

    /// Number of chars in the text
    fn char_len(&self) -> usize {
        self.offsets.len() - 1
    }

    /// Byte offset of a char offset, clamped to the end of the text
    fn byte_offset(&self, char_offset: usize) -> usize {
        self.offsets[char_offset.min(self.char_len())]
    }
}

/// Partition `text` into plain and claim segments
///
/// Claims are ordered by `start_index`; the sort is stable so ties keep
/// the order of `claims`.
pub fn segment<'a>(text: &'a str, claims: &[(&'a ClaimId, &'a Claim)]) -> Vec<Segment<'a>> {
    let bounds = CharBoundaries::new(text);
    let len = bounds.char_len();

    let mut sorted: Vec<&(&ClaimId, &Claim)> = claims.iter().collect();
    sorted.sort_by_key(|(_, claim)| claim.start_index);

    let slice = move |start: usize, end: usize| -> &'a str {
        &text[bounds.byte_offset(start)..bounds.byte_offset(end)]
    };

    let mut segments = Vec::with_capacity(sorted.len() * 2 + 1);
    let mut cursor = 0;

    for (id, claim) in sorted {
        let start = claim.start_index.min(len).max(cursor);
        let end = claim.end_index.min(len).max(start);

        if start > cursor {
            segments.push(Segment::plain(slice(cursor, start), cursor, start));
        }

        if end > start {
            segments.push(Segment {
                text: slice(start, end),
                start,
                end,
                claim_id: Some(*id),
                has_citations: claim.has_citations(),
            });
        }

        cursor = cursor.max(end);
    }

    if cursor < len {
        segments.push(Segment::plain(slice(cursor, len), cursor, len));
    }

    segments
}

/// Segment `text` using every claim of an analysis result
pub fn segment_document<'a>(text: &'a str, document: &'a DocumentResult) -> Vec<Segment<'a>> {
    let claims: Vec<(&ClaimId, &Claim)> = document.claims.iter().collect();
    segment(text, &claims)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn concat(segments: &[Segment<'_>]) -> String {
        segments.iter().map(|s| s.text).collect()
    }

    #[test]
    fn test_single_claim_three_segments() {
        let text = "a".repeat(50);
        let id = ClaimId::from("c1");
        let claim = Claim::new(10, 20, "claim");

        let segments = segment(&text, &[(&id, &claim)]);
        assert_eq!(segments.len(), 3);
        assert_eq!((segments[0].start, segments[0].end), (0, 10));
        assert!(!segments[0].is_claim());
        assert_eq!((segments[1].start, segments[1].end), (10, 20));
        assert_eq!(segments[1].claim_id, Some(&id));
        assert_eq!((segments[2].start, segments[2].end), (20, 50));
        assert_eq!(concat(&segments), text);
    }

    #[test]
    fn test_no_claims() {
        let segments = segment("just text", &[]);
        assert_eq!(segments.len(), 1);
        assert_eq!(segments[0].text, "just text");
        assert!(!segments[0].is_claim());

        assert!(segment("", &[]).is_empty());
    }

    #[test]
    fn test_claims_are_sorted_by_start() {
        let text = "first second third";
        let (a, b) = (ClaimId::from("a"), ClaimId::from("b"));
        let late = Claim::new(13, 18, "third");
        let early = Claim::new(0, 5, "first");

        let segments = segment(text, &[(&a, &late), (&b, &early)]);
        let claim_ids: Vec<&str> = segments
            .iter()
            .filter_map(|s| s.claim_id.map(|id| id.as_str()))
            .collect();
        assert_eq!(claim_ids, vec!["b", "a"]);
        assert_eq!(concat(&segments), text);
    }

    #[test]
    fn test_has_citations_flag() {
        let text = "cited uncited";
        let (a, b) = (ClaimId::from("a"), ClaimId::from("b"));
        let cited = Claim::new(0, 5, "cited").with_citation("x", "snippet");
        let uncited = Claim::new(6, 13, "uncited");

        let segments = segment(text, &[(&a, &cited), (&b, &uncited)]);
        assert!(segments[0].has_citations);
        assert!(!segments[1].has_citations);
        assert!(!segments[2].has_citations);
    }

    #[test]
    fn test_overlapping_claim_is_trimmed() {
        let text = "0123456789";
        let (a, b) = (ClaimId::from("a"), ClaimId::from("b"));
        let first = Claim::new(2, 6, "");
        let overlapping = Claim::new(4, 8, "");

        let segments = segment(text, &[(&a, &first), (&b, &overlapping)]);
        assert_eq!(concat(&segments), text);
        assert_eq!(segments[1].text, "2345");
        assert_eq!(segments[2].text, "67");
        assert_eq!(segments[2].claim_id, Some(&b));
    }

    #[test]
    fn test_contained_claim_emits_nothing() {
        let text = "0123456789";
        let (a, b) = (ClaimId::from("a"), ClaimId::from("b"));
        let outer = Claim::new(1, 9, "");
        let inner = Claim::new(3, 5, "");

        let segments = segment(text, &[(&a, &outer), (&b, &inner)]);
        assert_eq!(segments.len(), 3);
        assert!(segments.iter().all(|s| s.claim_id != Some(&b)));
        assert_eq!(concat(&segments), text);
    }

    #[test]
    fn test_inverted_and_out_of_range_spans() {
        let text = "short";
        let (a, b) = (ClaimId::from("a"), ClaimId::from("b"));
        let inverted = Claim::new(3, 1, "");
        let past_end = Claim::new(4, 400, "");

        let segments = segment(text, &[(&a, &inverted), (&b, &past_end)]);
        assert_eq!(concat(&segments), text);
        assert_eq!(segments.last().unwrap().text, "t");
        assert_eq!(segments.last().unwrap().claim_id, Some(&b));
    }

    #[test]
    fn test_multibyte_text_uses_char_offsets() {
        let text = "Café — naïve résumé";
        let id = ClaimId::from("c");
        let claim = Claim::new(7, 12, "naïve");

        let segments = segment(text, &[(&id, &claim)]);
        assert_eq!(segments[1].text, "naïve");
        assert_eq!(concat(&segments), text);
    }
}
