//! Single-source shortest paths (Dijkstra).
//!
//! # Freshness
//!
//! Nothing is cached between calls.  Every planner iteration and every
//! simulator leg runs a fresh search, so a link blocked between two calls is
//! honoured by the very next one.
//!
//! # Determinism
//!
//! Heap entries carry a push sequence number after the distance, so equal
//! distances pop in insertion order and neighbours are pushed in id order.

use std::cmp::{Ordering, Reverse};
use std::collections::{BinaryHeap, HashMap};

use sp_core::LocationId;

use crate::{Graph, GraphError, GraphResult};

// ── ShortestPaths ─────────────────────────────────────────────────────────────

/// Result of one Dijkstra run.
///
/// A location missing from both maps is unreachable from `source`.
#[derive(Clone, Debug)]
pub struct ShortestPaths {
    pub source: LocationId,

    /// Best distance from `source`.
    pub distance: HashMap<LocationId, f64>,

    /// Previous hop on the best path; `None` for the source itself.
    pub predecessor: HashMap<LocationId, Option<LocationId>>,
}

impl ShortestPaths {
    /// Distance to `target`, or `None` if unreachable.
    #[inline]
    pub fn distance(&self, target: LocationId) -> Option<f64> {
        self.distance.get(&target).copied()
    }

    #[inline]
    pub fn is_reachable(&self, target: LocationId) -> bool {
        self.distance.contains_key(&target)
    }

    /// Full path `source ..= target`, empty if unreachable.
    pub fn path_to(&self, target: LocationId) -> Vec<LocationId> {
        reconstruct_path(&self.predecessor, target)
    }
}

/// Walk `predecessor` back from `target` to the source.
///
/// Returns an empty `Vec` when `target` is not in the map.
pub fn reconstruct_path(
    predecessor: &HashMap<LocationId, Option<LocationId>>,
    target:      LocationId,
) -> Vec<LocationId> {
    if !predecessor.contains_key(&target) {
        return Vec::new();
    }
    let mut path = Vec::new();
    let mut cur = Some(target);
    while let Some(node) = cur {
        path.push(node);
        cur = predecessor.get(&node).copied().flatten();
    }
    path.reverse();
    path
}

// ── Dijkstra ──────────────────────────────────────────────────────────────────

/// Total order over non-negative, finite link-weight sums.
#[derive(Copy, Clone, Debug, PartialEq)]
struct Dist(f64);

impl Eq for Dist {}

impl PartialOrd for Dist {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Dist {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

/// Shortest distances and predecessors from `source` to every reachable
/// location.
///
/// Blocked links are skipped unless `include_blocked` is set.
///
/// # Errors
///
/// [`GraphError::UnknownLocation`] if `source` is not in the graph.
pub fn shortest_paths(
    graph:           &Graph,
    source:          LocationId,
    include_blocked: bool,
) -> GraphResult<ShortestPaths> {
    if !graph.contains(source) {
        return Err(GraphError::UnknownLocation(source));
    }

    let mut distance: HashMap<LocationId, f64> = HashMap::new();
    let mut predecessor: HashMap<LocationId, Option<LocationId>> = HashMap::new();
    distance.insert(source, 0.0);
    predecessor.insert(source, None);

    // Min-heap: (distance, push sequence, node).
    let mut heap: BinaryHeap<Reverse<(Dist, u64, LocationId)>> = BinaryHeap::new();
    let mut seq: u64 = 0;
    heap.push(Reverse((Dist(0.0), seq, source)));

    while let Some(Reverse((Dist(d), _, node))) = heap.pop() {
        // Skip stale heap entries.
        if distance.get(&node).is_some_and(|&best| d > best) {
            continue;
        }
        for link in graph.neighbors(node, include_blocked) {
            let candidate = d + link.weight;
            let better = distance.get(&link.to).is_none_or(|&best| candidate < best);
            if better {
                distance.insert(link.to, candidate);
                predecessor.insert(link.to, Some(node));
                seq += 1;
                heap.push(Reverse((Dist(candidate), seq, link.to)));
            }
        }
    }

    Ok(ShortestPaths { source, distance, predecessor })
}

/// Shortest distance from `from` to `to`, or `None` if unreachable.
pub fn distance_between(
    graph:           &Graph,
    from:            LocationId,
    to:              LocationId,
    include_blocked: bool,
) -> GraphResult<Option<f64>> {
    Ok(shortest_paths(graph, from, include_blocked)?.distance(to))
}
