//! Property-Based Testing for path ordering
//!
//! Uses proptest to check ordering properties over generated chains:
//! - Shuffled chains are always restored
//! - Sorting is idempotent
//! - Duplicate origins, closed loops and split chains always fail

use pathsort::{sort, Edge, PathOrderer, PathsortError};
use proptest::prelude::*;

prop_compose! {
    /// Distinct lowercase labels, at least `min` of them
    fn arb_labels(min: usize)(
        labels in prop::collection::hash_set("[a-z]{1,8}", min..40)
    ) -> Vec<String> {
        labels.into_iter().collect()
    }
}

fn chain(labels: &[String]) -> Vec<Edge> {
    labels
        .windows(2)
        .map(|w| Edge::new(w[0].clone(), w[1].clone(), "d"))
        .collect()
}

/// (ordered chain, same chain shuffled)
fn arb_shuffled_chain() -> impl Strategy<Value = (Vec<Edge>, Vec<Edge>)> {
    arb_labels(2).prop_flat_map(|labels| {
        let ordered = chain(&labels);
        (Just(ordered.clone()), Just(ordered).prop_shuffle())
    })
}

proptest! {
    /// Property: any permutation of a chain sorts back to the chain
    #[test]
    fn test_shuffled_chain_is_restored((ordered, shuffled) in arb_shuffled_chain()) {
        let sorted = sort(&shuffled).unwrap();
        let sorted: Vec<Edge> = sorted.into_iter().cloned().collect();
        prop_assert_eq!(sorted, ordered);
    }

    /// Property: consecutive output edges chain and nothing is dropped
    #[test]
    fn test_output_chains_end_to_end((_, shuffled) in arb_shuffled_chain()) {
        let sorted = sort(&shuffled).unwrap();
        prop_assert_eq!(sorted.len(), shuffled.len());
        for pair in sorted.windows(2) {
            prop_assert!(pair[0].chains_into(pair[1]));
        }
    }

    /// Property: sorting sorted output changes nothing
    #[test]
    fn test_sort_is_idempotent((_, shuffled) in arb_shuffled_chain()) {
        let orderer = PathOrderer::new();
        let once = orderer.sort_owned(shuffled).unwrap();
        let twice = orderer.sort_owned(once.clone()).unwrap();
        prop_assert_eq!(once, twice);
    }

    /// Property: changing label casing on one side keeps the order and the text
    #[test]
    fn test_casing_does_not_matter((ordered, shuffled) in arb_shuffled_chain()) {
        let shouted: Vec<Edge> = shuffled
            .iter()
            .map(|e| Edge::new(e.from(), e.to().to_uppercase(), e.description()))
            .collect();
        let sorted = sort(&shouted).unwrap();
        for (got, want) in sorted.iter().zip(&ordered) {
            prop_assert_eq!(got.from(), want.from());
            prop_assert_eq!(got.to(), want.to().to_uppercase());
        }
    }

    /// Property: a second edge from an existing origin is always rejected
    #[test]
    fn test_duplicate_origin_always_fails(
        labels in arb_labels(2),
        pick in any::<prop::sample::Index>(),
        at in any::<prop::sample::Index>(),
    ) {
        let mut edges = chain(&labels);
        let origin = edges[pick.index(edges.len())].from().to_string();
        let position = at.index(edges.len() + 1);
        edges.insert(position, Edge::new(origin.to_uppercase(), "elsewhere", "dup"));

        match sort(&edges) {
            Err(PathsortError::DuplicateOrigin { label }) => prop_assert_eq!(label, origin),
            other => prop_assert!(false, "expected DuplicateOrigin, got {:?}", other),
        }
    }

    /// Property: closing the chain into a loop always fails with Cycle
    #[test]
    fn test_closed_loop_always_fails(labels in arb_labels(2)) {
        let mut edges = chain(&labels);
        edges.push(Edge::new(labels[labels.len() - 1].clone(), labels[0].clone(), "back"));
        prop_assert!(matches!(sort(&edges), Err(PathsortError::Cycle)));
    }

    /// Property: two disjoint chains always fail with MultipleStarts
    #[test]
    fn test_split_chain_always_fails(labels in arb_labels(4)) {
        let (left, right) = labels.split_at(labels.len() / 2);
        let mut edges = chain(left);
        edges.extend(chain(right));
        prop_assert!(matches!(sort(&edges), Err(PathsortError::MultipleStarts)));
    }

    /// Property: arbitrary small edge sets never panic, and success is a real path
    #[test]
    fn test_arbitrary_edges_never_panic(
        raw in prop::collection::vec(("[a-dA-D]{1,2}", "[a-dA-D]{1,2}"), 0..12)
    ) {
        let edges: Vec<Edge> = raw.into_iter().map(|(f, t)| Edge::new(f, t, "")).collect();
        if let Ok(sorted) = sort(&edges) {
            prop_assert_eq!(sorted.len(), edges.len());
            for pair in sorted.windows(2) {
                prop_assert!(pair[0].chains_into(pair[1]));
            }
        }
    }
}
