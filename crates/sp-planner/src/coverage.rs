//! Maximum-coverage planner: bounded depth-first search under the life
//! budget ("Mode 1" / "Mode 2").
//!
//! # Search
//!
//! Finding the longest simple route under a distance budget is NP-hard, so
//! this is an anytime search.  It walks an explicit stack of frames; each
//! frame holds the candidates reachable from its location, nearest first,
//! and an index of the next one to try.
//!
//! ```text
//! push root(source)
//! loop:
//!   top frame exhausted?  → pop, un-visit what it consumed
//!   guard.tick() fails?   → stop, return best so far
//!   take next candidate   → consume target + unlisted intermediates,
//!                           record if better, push frame(target)
//! ```
//!
//! A candidate whose shortest path touches an already visited location is
//! discarded, so a returned route never passes the same location twice,
//! listed or not.  "Better" means more stops, then lower distance.
//!
//! Only distance matters here: no energy, resource, or special effects.

use std::collections::HashSet;

use log::debug;

use sp_agent::Traveler;
use sp_core::{LocationId, SearchLimits};
use sp_graph::{Graph, shortest_paths};

use crate::budget::life_budget;
use crate::plan::{Candidate, check_source, fresh_candidates};
use crate::{Plan, PlanResult, RoutePlanner};

/// Bounded DFS maximising the number of stops within the life budget.
#[derive(Clone, Debug)]
pub struct CoveragePlanner {
    pub limits: SearchLimits,
    name:       &'static str,
}

impl CoveragePlanner {
    pub fn new(limits: SearchLimits) -> Self {
        Self { limits, name: "coverage" }
    }

    /// Maximum coverage before exhaustion, ~1 s ceiling.
    pub fn mode1() -> Self {
        Self { limits: SearchLimits::mode1(), name: "mode1" }
    }

    /// Default planning mode, ~1.2 s ceiling.
    pub fn mode2() -> Self {
        Self { limits: SearchLimits::mode2(), name: "mode2" }
    }

    pub fn with_limits(mut self, limits: SearchLimits) -> Self {
        self.limits = limits;
        self
    }
}

impl Default for CoveragePlanner {
    fn default() -> Self {
        Self::mode2()
    }
}

struct Frame {
    distance:   f64,
    candidates: Vec<Candidate>,
    next:       usize,
    /// Locations marked visited when this frame was entered.
    consumed:   Vec<LocationId>,
}

/// `true` if `(stops, distance)` beats the current best.
#[inline]
fn improves(stops: usize, distance: f64, best_stops: usize, best_distance: f64) -> bool {
    stops > best_stops || (stops == best_stops && distance < best_distance)
}

impl RoutePlanner for CoveragePlanner {
    fn name(&self) -> &'static str {
        self.name
    }

    fn plan(&self, graph: &Graph, source: LocationId, traveler: &Traveler) -> PlanResult<Plan> {
        check_source(graph, source)?;
        let budget = life_budget(traveler);
        if budget <= 0.0 {
            return Ok(Plan::trivial(source));
        }

        let total = graph.location_count();
        let mut guard = self.limits.start();
        let mut visited: HashSet<LocationId> = HashSet::from([source]);
        let mut route: Vec<LocationId> = vec![source];
        let mut best_route = route.clone();
        let mut best_distance = 0.0;

        let root = shortest_paths(graph, source, false)?;
        let mut stack = vec![Frame {
            distance:   0.0,
            candidates: fresh_candidates(graph, &root, |id| visited.contains(&id), budget),
            next:       0,
            consumed:   Vec::new(),
        }];

        while let Some(top) = stack.last_mut() {
            if top.next >= top.candidates.len() {
                if let Some(done) = stack.pop() {
                    for id in &done.consumed {
                        visited.remove(id);
                    }
                    if !done.consumed.is_empty() {
                        route.pop();
                    }
                }
                continue;
            }
            if best_route.len() == total || !guard.tick() {
                break;
            }

            let cand = top.candidates[top.next].clone();
            top.next += 1;
            let distance = top.distance + cand.distance;
            if distance > budget {
                // Candidates are sorted; nothing further in this frame fits.
                top.next = top.candidates.len();
                continue;
            }
            if visited.contains(&cand.target) || cand.via.iter().any(|v| visited.contains(v)) {
                continue;
            }

            let mut consumed = cand.via;
            consumed.push(cand.target);
            visited.extend(consumed.iter().copied());
            route.push(cand.target);

            if improves(route.len(), distance, best_route.len(), best_distance) {
                best_route.clone_from(&route);
                best_distance = distance;
            }

            let paths = shortest_paths(graph, cand.target, false)?;
            let candidates = fresh_candidates(graph, &paths, |id| visited.contains(&id), budget - distance);
            stack.push(Frame { distance, candidates, next: 0, consumed });
        }

        let timed_out = guard.expired();
        debug!(
            "{}: {} stops, distance {best_distance:.2}, {} expansions{}",
            self.name,
            best_route.len(),
            guard.expansions(),
            if timed_out { " (ceiling hit)" } else { "" }
        );
        Ok(Plan {
            sequence:        best_route,
            cost_estimate:   best_distance,
            energy_estimate: None,
            expansions:      guard.expansions(),
            timed_out,
        })
    }
}
