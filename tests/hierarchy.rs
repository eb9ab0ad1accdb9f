//! Hierarchy Integration Tests
//!
//! Tests for root detection, child filtering and cycle-safe walks over
//! decoded service responses.

use std::collections::HashSet;

use citerite::adapters::parse_scan_response;
use citerite::core::resolve_citations;
use citerite::{children, root_claims, walk, ClaimId};

const RESPONSE: &str = r#"{
  "document": {
    "claims": {
      "A": {"start_index": 0, "end_index": 5, "claim_text": "A", "document_id": "d",
            "parent_claim_ids": [], "children_claim_ids": ["B", "ghost"], "relevant_citations": []},
      "B": {"start_index": 6, "end_index": 9, "claim_text": "B", "document_id": "d",
            "parent_claim_ids": ["A"], "children_claim_ids": [],
            "relevant_citations": [{"citation_id": "X", "snippet": "s"}]},
      "C": {"start_index": 10, "end_index": 12, "claim_text": "C", "document_id": "d",
            "parent_claim_ids": ["D"], "children_claim_ids": ["D"], "relevant_citations": []},
      "D": {"start_index": 13, "end_index": 15, "claim_text": "D", "document_id": "d",
            "parent_claim_ids": ["C"], "children_claim_ids": ["C"], "relevant_citations": []}
    },
    "citations": {}
  }
}"#;

fn as_strs(ids: &[&ClaimId]) -> Vec<String> {
    ids.iter().map(|id| id.to_string()).collect()
}

#[test]
fn test_roots_and_children() {
    let document = parse_scan_response(RESPONSE).unwrap();

    assert_eq!(as_strs(&root_claims(&document.claims)), vec!["A"]);
    assert_eq!(as_strs(&children(&document.claims, &ClaimId::from("A"))), vec!["B"]);
}

#[test]
fn test_walk_visits_each_claim_once() {
    let document = parse_scan_response(RESPONSE).unwrap();
    let walked = walk(&document.claims);

    let unique: HashSet<&ClaimId> = walked.iter().map(|e| e.id).collect();
    assert_eq!(walked.len(), document.claims.len());
    assert_eq!(unique.len(), document.claims.len());

    let order: Vec<(String, usize)> = walked
        .iter()
        .map(|e| (e.id.to_string(), e.depth))
        .collect();
    assert_eq!(
        order,
        vec![
            ("A".to_string(), 0),
            ("B".to_string(), 1),
            ("C".to_string(), 0),
            ("D".to_string(), 1),
        ]
    );
}

#[test]
fn test_missing_citation_resolves_to_nothing() {
    let document = parse_scan_response(RESPONSE).unwrap();
    let claim = document.claim(&ClaimId::from("B")).unwrap();

    assert!(resolve_citations(claim, &document.citations).is_empty());
}
