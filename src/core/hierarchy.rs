//! Claim hierarchy reconstruction.
//!
//! Claims arrive as a flat map where each claim lists its parent and child
//! ids. Nothing guarantees the links are mutual, that every id exists, or
//! that the graph is acyclic, so everything here tolerates:
//! - Dangling ids (dropped)
//! - Claims whose parents are all missing (treated as roots)
//! - Cycles (each claim is visited at most once)

use std::collections::HashSet;

use crate::domain::{ClaimId, ClaimMap};

/// One row of a depth-first claim tree walk
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TreeEntry<'a> {
    pub id: &'a ClaimId,
    /// 0 for roots
    pub depth: usize,
}

/// Order ids by (start_index, id)
fn sort_by_position<'a>(claims: &'a ClaimMap, ids: &mut [&'a ClaimId]) {
    ids.sort_by_key(|id| (claims.get(*id).map(|c| c.start_index).unwrap_or(usize::MAX), *id));
}

/// Claims with no parent present in the map, in text order
pub fn root_claims(claims: &ClaimMap) -> Vec<&ClaimId> {
    let mut roots: Vec<&ClaimId> = claims
        .iter()
        .filter(|(_, claim)| {
            claim
                .parent_claim_ids
                .iter()
                .all(|parent| !claims.contains_key(parent))
        })
        .map(|(id, _)| id)
        .collect();

    sort_by_position(claims, &mut roots);
    roots
}

/// Children of `id` that exist in the map, in listed order
///
/// Returns an empty list for an unknown id.
pub fn children<'a>(claims: &'a ClaimMap, id: &ClaimId) -> Vec<&'a ClaimId> {
    claims
        .get(id)
        .map(|claim| {
            claim
                .children_claim_ids
                .iter()
                .filter_map(|child| claims.get_key_value(child).map(|(key, _)| key))
                .collect()
        })
        .unwrap_or_default()
}

/// Parents of `id` that exist in the map, in listed order
pub fn parents<'a>(claims: &'a ClaimMap, id: &ClaimId) -> Vec<&'a ClaimId> {
    claims
        .get(id)
        .map(|claim| {
            claim
                .parent_claim_ids
                .iter()
                .filter_map(|parent| claims.get_key_value(parent).map(|(key, _)| key))
                .collect()
        })
        .unwrap_or_default()
}

/// Depth-first pre-order walk of the whole claim forest
///
/// Uses an explicit stack and a visited set: an id already emitted is never
/// emitted or expanded again, so the walk terminates on cycles. Claims not
/// reachable from any root (a parent/child cycle with no way in) are walked
/// afterwards as extra roots, so every claim appears exactly once.
pub fn walk(claims: &ClaimMap) -> Vec<TreeEntry<'_>> {
    let mut entries = Vec::with_capacity(claims.len());
    let mut visited: HashSet<&ClaimId> = HashSet::with_capacity(claims.len());

    let mut remaining: Vec<&ClaimId> = claims.keys().collect();
    sort_by_position(claims, &mut remaining);

    let starts = root_claims(claims).into_iter().chain(remaining);

    for start in starts {
        if visited.contains(start) {
            continue;
        }

        let mut stack = vec![TreeEntry { id: start, depth: 0 }];
        while let Some(entry) = stack.pop() {
            if !visited.insert(entry.id) {
                continue;
            }
            entries.push(entry);

            // Reverse so the first listed child is walked first
            for child in children(claims, entry.id).into_iter().rev() {
                if !visited.contains(child) {
                    stack.push(TreeEntry {
                        id: child,
                        depth: entry.depth + 1,
                    });
                }
            }
        }
    }

    entries
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Claim;

    fn map(claims: Vec<(&str, Claim)>) -> ClaimMap {
        claims
            .into_iter()
            .map(|(id, claim)| (ClaimId::from(id), claim))
            .collect()
    }

    fn ids<'a>(list: &[&'a ClaimId]) -> Vec<&'a str> {
        list.iter().map(|id| id.as_str()).collect()
    }

    #[test]
    fn test_parent_child_pair() {
        let claims = map(vec![
            ("A", Claim::new(0, 5, "a").with_children(["B"])),
            ("B", Claim::new(6, 9, "b").with_parents(["A"])),
        ]);

        assert_eq!(ids(&root_claims(&claims)), vec!["A"]);
        assert_eq!(ids(&children(&claims, &ClaimId::from("A"))), vec!["B"]);
        assert_eq!(ids(&parents(&claims, &ClaimId::from("B"))), vec!["A"]);
        assert!(parents(&claims, &ClaimId::from("A")).is_empty());
        assert!(children(&claims, &ClaimId::from("B")).is_empty());
    }

    #[test]
    fn test_roots_ordered_by_start_then_id() {
        let claims = map(vec![
            ("z", Claim::new(0, 2, "")),
            ("b", Claim::new(10, 12, "")),
            ("a", Claim::new(10, 11, "")),
        ]);

        assert_eq!(ids(&root_claims(&claims)), vec!["z", "a", "b"]);
    }

    #[test]
    fn test_missing_parent_makes_root() {
        let claims = map(vec![("orphan", Claim::new(0, 1, "").with_parents(["ghost"]))]);
        assert_eq!(ids(&root_claims(&claims)), vec!["orphan"]);
        assert!(parents(&claims, &ClaimId::from("orphan")).is_empty());
    }

    #[test]
    fn test_dangling_children_dropped() {
        let claims = map(vec![
            ("A", Claim::new(0, 1, "").with_children(["ghost", "B"])),
            ("B", Claim::new(2, 3, "").with_parents(["A"])),
        ]);

        assert_eq!(ids(&children(&claims, &ClaimId::from("A"))), vec!["B"]);
        assert!(children(&claims, &ClaimId::from("nope")).is_empty());
    }

    #[test]
    fn test_walk_depths_and_order() {
        let claims = map(vec![
            ("A", Claim::new(0, 1, "").with_children(["C", "B"])),
            ("B", Claim::new(2, 3, "").with_parents(["A"])),
            ("C", Claim::new(4, 5, "").with_parents(["A"]).with_children(["D"])),
            ("D", Claim::new(6, 7, "").with_parents(["C"])),
            ("E", Claim::new(8, 9, "")),
        ]);

        let walked: Vec<(&str, usize)> = walk(&claims)
            .iter()
            .map(|e| (e.id.as_str(), e.depth))
            .collect();
        assert_eq!(
            walked,
            vec![("A", 0), ("C", 1), ("D", 2), ("B", 1), ("E", 0)]
        );
    }

    #[test]
    fn test_walk_self_reference_terminates() {
        let claims = map(vec![(
            "A",
            Claim::new(0, 1, "").with_children(["A"]),
        )]);

        let walked = walk(&claims);
        assert_eq!(walked.len(), 1);
        assert_eq!(walked[0].id.as_str(), "A");
    }

    #[test]
    fn test_walk_unreachable_cycle_still_listed() {
        let claims = map(vec![
            ("A", Claim::new(0, 1, "").with_parents(["B"]).with_children(["B"])),
            ("B", Claim::new(2, 3, "").with_parents(["A"]).with_children(["A"])),
        ]);

        assert!(root_claims(&claims).is_empty());
        let walked: Vec<(&str, usize)> = walk(&claims)
            .iter()
            .map(|e| (e.id.as_str(), e.depth))
            .collect();
        assert_eq!(walked, vec![("A", 0), ("B", 1)]);
    }
}
