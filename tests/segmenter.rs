//! Segmenter Integration Tests
//!
//! Tests for the round-trip and segment-shape guarantees of document
//! segmentation.

use citerite::{segment, segment_document, Claim, ClaimId, DocumentResult};

fn concat(text: &str, claims: &[(ClaimId, Claim)]) -> String {
    let refs: Vec<(&ClaimId, &Claim)> = claims.iter().map(|(id, c)| (id, c)).collect();
    segment(text, &refs).iter().map(|s| s.text).collect()
}

#[test]
fn test_round_trip_non_overlapping() {
    let text = "Rust is fast. Rust is safe. Rust is fun to write every single day.";
    let claims = vec![
        (ClaimId::from("c"), Claim::new(28, 39, "fun")),
        (ClaimId::from("a"), Claim::new(0, 12, "fast")),
        (ClaimId::from("b"), Claim::new(14, 26, "safe")),
    ];

    assert_eq!(concat(text, &claims), text);
}

#[test]
fn test_round_trip_adjacent_and_edge_claims() {
    let text = "abcdef";
    let claims = vec![
        (ClaimId::from("a"), Claim::new(0, 3, "")),
        (ClaimId::from("b"), Claim::new(3, 6, "")),
    ];

    let refs: Vec<(&ClaimId, &Claim)> = claims.iter().map(|(id, c)| (id, c)).collect();
    let segments = segment(text, &refs);
    assert_eq!(segments.len(), 2);
    assert!(segments.iter().all(|s| s.is_claim()));
    assert_eq!(concat(text, &claims), text);
}

#[test]
fn test_round_trip_survives_malformed_spans() {
    let text = "The quick brown fox jumps over the lazy dog";
    let claims = vec![
        (ClaimId::from("a"), Claim::new(4, 19, "")),
        (ClaimId::from("b"), Claim::new(10, 25, "")),
        (ClaimId::from("c"), Claim::new(30, 20, "")),
        (ClaimId::from("d"), Claim::new(40, 1000, "")),
        (ClaimId::from("e"), Claim::new(2000, 3000, "")),
    ];

    assert_eq!(concat(text, &claims), text);
}

#[test]
fn test_fifty_char_text_with_one_claim() {
    let text: String = ('a'..='z').chain('A'..='X').collect();
    assert_eq!(text.chars().count(), 50);

    let id = ClaimId::from("only");
    let claim = Claim::new(10, 20, "");
    let segments = segment(&text, &[(&id, &claim)]);

    assert_eq!(segments.len(), 3);
    assert_eq!(segments[0].text, &text[0..10]);
    assert!(!segments[0].is_claim());
    assert_eq!(segments[1].text, &text[10..20]);
    assert_eq!(segments[1].claim_id, Some(&id));
    assert_eq!(segments[2].text, &text[20..50]);
    assert!(!segments[2].is_claim());
}

#[test]
fn test_segment_document_uses_every_claim() {
    let mut document = DocumentResult::default();
    document
        .claims
        .insert(ClaimId::from("z"), Claim::new(0, 4, "").with_citation("x", ""));
    document.claims.insert(ClaimId::from("y"), Claim::new(5, 9, ""));

    let segments = segment_document("this that", &document);
    let ids: Vec<&str> = segments
        .iter()
        .filter_map(|s| s.claim_id.map(|id| id.as_str()))
        .collect();
    assert_eq!(ids, vec!["z", "y"]);
    assert!(segments[0].has_citations);
    assert!(!segments[2].has_citations);
}

#[test]
fn test_segments_serialize_for_json_output() {
    let id = ClaimId::from("c1");
    let claim = Claim::new(0, 2, "");
    let segments = segment("hi there", &[(&id, &claim)]);

    let json = serde_json::to_value(&segments).unwrap();
    assert_eq!(json[0]["claim_id"], "c1");
    assert_eq!(json[0]["text"], "hi");
    assert!(json[1].get("claim_id").is_none());
}
