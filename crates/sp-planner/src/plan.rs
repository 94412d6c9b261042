//! The planner contract: [`RoutePlanner`] and its output, [`Plan`].
//!
//! # Pluggability
//!
//! The simulator and the demo only see planners through [`RoutePlanner`], so
//! a new strategy can be dropped in without touching either.  Every
//! implementation is a pure function of `(graph, source, traveler)` plus its
//! own configuration; none of them mutate the traveler they are given.

use std::collections::HashSet;

use sp_agent::Traveler;
use sp_core::LocationId;
use sp_graph::{Graph, ShortestPaths, distance_between};

use crate::{PlanError, PlanResult};

// ── Plan ──────────────────────────────────────────────────────────────────────

/// An ordered visitation sequence plus what the planner thinks it costs.
#[derive(Clone, Debug, PartialEq)]
pub struct Plan {
    /// Locations to visit, starting with the source.  Never contains a
    /// duplicate id.
    pub sequence: Vec<LocationId>,

    /// Budget units the planner charged for the route.  For every planner
    /// except the enhanced greedy this is the travelled distance.
    pub cost_estimate: f64,

    /// Energy the planner expects the route to consume, for planners that
    /// track energy separately from distance.
    pub energy_estimate: Option<f64>,

    /// Search expansions performed (bounded planners) or selection rounds
    /// (greedy planners).
    pub expansions: u64,

    /// `true` when a time or expansion ceiling cut the search short.  The
    /// plan is still valid, just possibly not the best reachable one.
    pub timed_out: bool,
}

impl Plan {
    /// The degenerate plan `[source]` with zero cost.
    pub fn trivial(source: LocationId) -> Self {
        Self {
            sequence:        vec![source],
            cost_estimate:   0.0,
            energy_estimate: None,
            expansions:      0,
            timed_out:       false,
        }
    }

    /// Number of listed stops, source included.
    #[inline]
    pub fn stops(&self) -> usize {
        self.sequence.len()
    }

    #[inline]
    pub fn source(&self) -> Option<LocationId> {
        self.sequence.first().copied()
    }

    /// Recompute the route length pair-by-pair with fresh shortest-path
    /// queries (blocked links excluded).
    ///
    /// Returns `None` if some leg is no longer reachable, e.g. because a
    /// link was blocked after planning.
    pub fn route_distance(&self, graph: &Graph) -> PlanResult<Option<f64>> {
        let mut total = 0.0;
        for pair in self.sequence.windows(2) {
            match distance_between(graph, pair[0], pair[1], false)? {
                Some(d) => total += d,
                None => return Ok(None),
            }
        }
        Ok(Some(total))
    }

    /// `true` if no id appears twice.
    pub fn is_simple(&self) -> bool {
        let mut seen = HashSet::with_capacity(self.sequence.len());
        self.sequence.iter().all(|id| seen.insert(*id))
    }
}

// ── RoutePlanner trait ────────────────────────────────────────────────────────

/// A route-planning strategy.
///
/// # Contract
///
/// - `Err(PlanError::UnknownSource)` if `source` is not in `graph`.
/// - `Ok(Plan::trivial(source))` if the strategy's budget is not positive.
/// - Otherwise a plan starting at `source` whose consecutive legs are all
///   reachable over unblocked links at planning time.
pub trait RoutePlanner {
    /// Short stable name used in logs and reports.
    fn name(&self) -> &'static str;

    fn plan(&self, graph: &Graph, source: LocationId, traveler: &Traveler) -> PlanResult<Plan>;
}

// ── Shared helpers ────────────────────────────────────────────────────────────

pub(crate) fn check_source(graph: &Graph, source: LocationId) -> PlanResult<()> {
    if graph.contains(source) {
        Ok(())
    } else {
        Err(PlanError::UnknownSource(source))
    }
}

/// A next stop for the bounded searches.
#[derive(Clone, Debug)]
pub(crate) struct Candidate {
    pub target:   LocationId,
    pub distance: f64,
    /// Unlisted intermediate locations on the shortest path, endpoints
    /// excluded.  They are consumed together with `target`.
    pub via:      Vec<LocationId>,
}

/// Unvisited locations within `remaining` distance whose shortest path
/// touches no visited location, nearest first (ties by id).
pub(crate) fn fresh_candidates(
    graph:     &Graph,
    paths:     &ShortestPaths,
    visited:   impl Fn(LocationId) -> bool,
    remaining: f64,
) -> Vec<Candidate> {
    let mut out: Vec<Candidate> = graph
        .location_ids()
        .filter(|&id| !visited(id))
        .filter_map(|id| {
            let distance = paths.distance(id)?;
            if distance > remaining {
                return None;
            }
            let path = paths.path_to(id);
            let via: Vec<LocationId> = path
                .get(1..path.len().saturating_sub(1))
                .map(<[LocationId]>::to_vec)
                .unwrap_or_default();
            if via.iter().any(|&v| visited(v)) {
                return None;
            }
            Some(Candidate { target: id, distance, via })
        })
        .collect();
    out.sort_by(|a, b| a.distance.total_cmp(&b.distance).then(a.target.cmp(&b.target)));
    out
}
