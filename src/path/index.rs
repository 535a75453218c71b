//! EdgeIndex - per-call index over a borrowed edge slice
//!
//! Phases, in order:
//! 1. `build`: one record per folded origin label (duplicates rejected)
//! 2. `build`: in-degree from destinations that are themselves origins
//! 3. `start`: the single record nobody points at
//! 4. `order` / `walk_from`: follow destinations until one is not indexed
//!
//! A label used only as a destination (the sink) gets no record, so its
//! in-degree is never tracked.

use std::borrow::Cow;
use std::collections::hash_map::Entry;

use rustc_hash::FxHashMap;

use crate::ast::{fold_label, Edge};
use crate::error::{PathsortError, Result};

/// One indexed edge. `records[i]` always describes `edges[i]`.
#[derive(Debug)]
struct IndexRecord<'a> {
    edge: &'a Edge,
    to_key: Cow<'a, str>,
    incoming: usize,
}

/// Index of edges keyed by folded origin label
#[derive(Debug)]
pub struct EdgeIndex<'a> {
    /// folded origin -> position in `records`
    slots: FxHashMap<Cow<'a, str>, usize>,
    records: Vec<IndexRecord<'a>>,
}

impl<'a> EdgeIndex<'a> {
    /// Index `edges` and count incoming references.
    ///
    /// Fails with `DuplicateOrigin` (carrying the folded label) as soon as a
    /// second edge claims an origin already seen.
    pub fn build(edges: &'a [Edge]) -> Result<Self> {
        let mut slots: FxHashMap<Cow<'a, str>, usize> =
            FxHashMap::with_capacity_and_hasher(edges.len(), Default::default());
        let mut records: Vec<IndexRecord<'a>> = Vec::with_capacity(edges.len());

        for edge in edges {
            match slots.entry(edge.from_key()) {
                Entry::Occupied(taken) => {
                    return Err(PathsortError::DuplicateOrigin {
                        label: taken.key().to_string(),
                    });
                }
                Entry::Vacant(free) => {
                    free.insert(records.len());
                    records.push(IndexRecord {
                        edge,
                        to_key: edge.to_key(),
                        incoming: 0,
                    });
                }
            }
        }

        for i in 0..records.len() {
            let target = slots.get(records[i].to_key.as_ref()).copied();
            if let Some(target) = target {
                records[target].incoming += 1;
            }
        }

        Ok(Self { slots, records })
    }

    /// Number of indexed edges (equals the input length once built)
    #[inline]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// True when `label` (any casing) originates an edge
    #[inline]
    pub fn contains(&self, label: &str) -> bool {
        self.slots.contains_key(fold_label(label).as_ref())
    }

    /// Incoming references to the node `label`.
    ///
    /// `None` for labels that never appear as an origin, including the sink.
    pub fn incoming_count(&self, label: &str) -> Option<usize> {
        self.slots
            .get(fold_label(label).as_ref())
            .map(|&slot| self.records[slot].incoming)
    }

    /// The unique edge with no incoming reference
    pub fn start(&self) -> Result<&'a Edge> {
        self.start_slot().map(|slot| self.records[slot].edge)
    }

    /// Every indexed edge in path order, starting at `start()`.
    ///
    /// Fails with `Cycle` when the walk comes back to an edge it already
    /// visited, or ends before covering every edge (a cycle hanging off to
    /// the side with no way in).
    pub fn order(&self) -> Result<Vec<&'a Edge>> {
        Ok(self
            .order_slots()?
            .into_iter()
            .map(|slot| self.records[slot].edge)
            .collect())
    }

    /// Walk the chain beginning at `start`, which need not be the source.
    ///
    /// `start` itself comes first. The walk stops at the first destination
    /// with no indexed origin; edges upstream of `start` are not included.
    pub fn walk_from(&self, start: &'a Edge) -> Result<Vec<&'a Edge>> {
        let mut visited = vec![false; self.records.len()];
        if let Some(&slot) = self.slots.get(start.from_key().as_ref()) {
            visited[slot] = true;
        }

        let start_to = start.to_key();
        let mut chain = Vec::new();
        self.follow(&start_to, &mut visited, &mut chain)?;

        let mut walked = Vec::with_capacity(chain.len() + 1);
        walked.push(start);
        walked.extend(chain.into_iter().map(|slot| self.records[slot].edge));
        Ok(walked)
    }

    pub(crate) fn order_slots(&self) -> Result<Vec<usize>> {
        let start = self.start_slot()?;

        let mut visited = vec![false; self.records.len()];
        visited[start] = true;
        let mut order = Vec::with_capacity(self.records.len());
        order.push(start);
        self.follow(&self.records[start].to_key, &mut visited, &mut order)?;

        if order.len() != self.records.len() {
            return Err(PathsortError::Cycle);
        }
        Ok(order)
    }

    fn start_slot(&self) -> Result<usize> {
        let mut sources = self
            .records
            .iter()
            .enumerate()
            .filter(|(_, record)| record.incoming == 0)
            .map(|(slot, _)| slot);

        match (sources.next(), sources.next()) {
            (None, _) => Err(PathsortError::Cycle),
            (Some(slot), None) => Ok(slot),
            (Some(_), Some(_)) => Err(PathsortError::MultipleStarts),
        }
    }

    /// Append successors of `to_key` to `out` until the sink
    fn follow<'s>(
        &'s self,
        mut to_key: &'s str,
        visited: &mut [bool],
        out: &mut Vec<usize>,
    ) -> Result<()> {
        while let Some(&next) = self.slots.get(to_key) {
            if visited[next] {
                return Err(PathsortError::Cycle);
            }
            visited[next] = true;
            out.push(next);
            to_key = &*self.records[next].to_key;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn edges(pairs: &[(&str, &str)]) -> Vec<Edge> {
        pairs
            .iter()
            .map(|(from, to)| Edge::new(*from, *to, "d"))
            .collect()
    }

    fn labels(path: &[&Edge]) -> Vec<String> {
        path.iter()
            .map(|e| format!("{}>{}", e.from(), e.to()))
            .collect()
    }

    // ═══════════════════════════════════════════════════════════════
    // BUILD + IN-DEGREE
    // ═══════════════════════════════════════════════════════════════

    #[test]
    fn test_build_counts_incoming_references() {
        let input = edges(&[("b", "c"), ("a", "B"), ("c", "sink")]);
        let index = EdgeIndex::build(&input).unwrap();

        assert_eq!(index.len(), 3);
        assert_eq!(index.incoming_count("A"), Some(0));
        assert_eq!(index.incoming_count("b"), Some(1));
        assert_eq!(index.incoming_count("c"), Some(1));
    }

    #[test]
    fn test_sink_is_not_indexed() {
        let input = edges(&[("a", "b"), ("b", "End")]);
        let index = EdgeIndex::build(&input).unwrap();

        assert!(!index.contains("end"));
        assert_eq!(index.incoming_count("End"), None);
    }

    #[test]
    fn test_duplicate_origin_reports_folded_label() {
        let input = edges(&[("Rome", "paris"), ("a", "b"), ("rOME", "london")]);
        let err = EdgeIndex::build(&input).unwrap_err();

        match err {
            PathsortError::DuplicateOrigin { label } => assert_eq!(label, "rome"),
            other => panic!("expected DuplicateOrigin, got {other:?}"),
        }
    }

    #[test]
    fn test_empty_build_is_ok_but_has_no_start() {
        let index = EdgeIndex::build(&[]).unwrap();
        assert!(index.is_empty());
        assert!(matches!(index.start(), Err(PathsortError::Cycle)));
    }

    // ═══════════════════════════════════════════════════════════════
    // START DETECTION
    // ═══════════════════════════════════════════════════════════════

    #[test]
    fn test_start_is_unique_source() {
        let input = edges(&[("b", "c"), ("a", "b")]);
        let index = EdgeIndex::build(&input).unwrap();
        assert_eq!(index.start().unwrap().from(), "a");
    }

    #[test]
    fn test_two_sources_are_ambiguous() {
        let input = edges(&[("a", "x"), ("b", "y")]);
        let index = EdgeIndex::build(&input).unwrap();
        assert!(matches!(index.start(), Err(PathsortError::MultipleStarts)));
    }

    #[test]
    fn test_self_loop_has_no_start() {
        let input = edges(&[("a", "A")]);
        let index = EdgeIndex::build(&input).unwrap();
        assert_eq!(index.incoming_count("a"), Some(1));
        assert!(matches!(index.start(), Err(PathsortError::Cycle)));
    }

    // ═══════════════════════════════════════════════════════════════
    // TRAVERSAL
    // ═══════════════════════════════════════════════════════════════

    #[test]
    fn test_order_follows_chain() {
        let input = edges(&[("c", "d"), ("a", "b"), ("B", "c")]);
        let index = EdgeIndex::build(&input).unwrap();
        assert_eq!(
            labels(&index.order().unwrap()),
            vec!["a>b", "B>c", "c>d"]
        );
    }

    #[test]
    fn test_cycle_reachable_from_start_is_detected() {
        // a → b → c → b: a is the only source, the walk would never end
        let input = edges(&[("a", "b"), ("b", "c"), ("c", "b")]);
        let index = EdgeIndex::build(&input).unwrap();
        assert_eq!(index.start().unwrap().from(), "a");
        assert!(matches!(index.order(), Err(PathsortError::Cycle)));
    }

    #[test]
    fn test_detached_cycle_is_detected() {
        // a → b, plus c ⇄ d with no way in
        let input = edges(&[("a", "b"), ("c", "d"), ("d", "c")]);
        let index = EdgeIndex::build(&input).unwrap();
        assert_eq!(index.start().unwrap().from(), "a");
        assert!(matches!(index.order(), Err(PathsortError::Cycle)));
    }

    #[test]
    fn test_walk_from_middle_of_chain() {
        let input = edges(&[("a", "b"), ("b", "c"), ("c", "d")]);
        let index = EdgeIndex::build(&input).unwrap();
        let walked = index.walk_from(&input[1]).unwrap();
        assert_eq!(labels(&walked), vec!["b>c", "c>d"]);
    }

    #[test]
    fn test_walk_from_foreign_edge() {
        let input = edges(&[("b", "c"), ("c", "d")]);
        let index = EdgeIndex::build(&input).unwrap();
        let outside = Edge::new("z", "B", "d");
        let walked = index.walk_from(&outside).unwrap();
        assert_eq!(labels(&walked), vec!["z>B", "b>c", "c>d"]);
    }

    #[test]
    fn test_walk_from_into_cycle_fails() {
        let input = edges(&[("a", "b"), ("b", "a")]);
        let index = EdgeIndex::build(&input).unwrap();
        assert!(matches!(
            index.walk_from(&input[0]),
            Err(PathsortError::Cycle)
        ));
    }
}
