//! Beam-search planner ("Mode 2++").
//!
//! A width-limited relaxation of the coverage DFS with predictable latency
//! on large graphs.  Each round extends every partial route in the beam by
//! its nearest fresh candidates, then keeps the best `beam_width` results:
//!
//! ```text
//! k      = max(1, beam_width × branching / |beam|)
//! rank   = more stops, then lower distance, then route order
//! ```
//!
//! Routes only grow, so the search ends after at most `|locations|` rounds
//! even without a ceiling.

use std::cmp::Ordering;
use std::collections::BTreeSet;

use log::debug;

use sp_agent::Traveler;
use sp_core::{LocationId, SearchLimits};
use sp_graph::{Graph, shortest_paths};

use crate::budget::life_budget;
use crate::plan::{check_source, fresh_candidates};
use crate::{Plan, PlanError, PlanResult, RoutePlanner};

#[derive(Clone, Debug)]
pub struct BeamPlanner {
    pub limits: SearchLimits,

    /// Partial routes kept after each round.
    pub beam_width: usize,

    /// Average children generated per kept route.
    pub branching: usize,
}

impl BeamPlanner {
    pub fn new(limits: SearchLimits) -> Self {
        Self { limits, beam_width: 64, branching: 4 }
    }

    pub fn beam_width(mut self, beam_width: usize) -> Self {
        self.beam_width = beam_width;
        self
    }

    pub fn branching(mut self, branching: usize) -> Self {
        self.branching = branching;
        self
    }
}

impl Default for BeamPlanner {
    fn default() -> Self {
        Self::new(SearchLimits::mode2())
    }
}

#[derive(Clone, Debug)]
struct Partial {
    route:    Vec<LocationId>,
    visited:  BTreeSet<LocationId>,
    distance: f64,
}

fn rank(a: &Partial, b: &Partial) -> Ordering {
    b.route
        .len()
        .cmp(&a.route.len())
        .then(a.distance.total_cmp(&b.distance))
        .then_with(|| a.route.cmp(&b.route))
}

impl RoutePlanner for BeamPlanner {
    fn name(&self) -> &'static str {
        "beam"
    }

    fn plan(&self, graph: &Graph, source: LocationId, traveler: &Traveler) -> PlanResult<Plan> {
        check_source(graph, source)?;
        if self.beam_width == 0 || self.branching == 0 {
            return Err(PlanError::InvalidLimits(format!(
                "beam width {} and branching {} must both be positive",
                self.beam_width, self.branching
            )));
        }
        let budget = life_budget(traveler);
        if budget <= 0.0 {
            return Ok(Plan::trivial(source));
        }

        let mut guard = self.limits.start();
        let mut best = Partial {
            route:    vec![source],
            visited:  BTreeSet::from([source]),
            distance: 0.0,
        };
        let mut beam = vec![best.clone()];
        let mut rounds = 0u32;

        'search: while !beam.is_empty() {
            rounds += 1;
            let k = (self.beam_width.saturating_mul(self.branching) / beam.len()).max(1);
            let mut children: Vec<Partial> = Vec::new();

            for state in &beam {
                let Some(&last) = state.route.last() else { continue };
                let paths = shortest_paths(graph, last, false)?;
                let fresh = fresh_candidates(
                    graph,
                    &paths,
                    |id| state.visited.contains(&id),
                    budget - state.distance,
                );
                for cand in fresh.into_iter().take(k) {
                    if !guard.tick() {
                        children.sort_by(rank);
                        if let Some(top) = children.first() {
                            if rank(top, &best) == Ordering::Less {
                                best = top.clone();
                            }
                        }
                        break 'search;
                    }
                    let mut child = state.clone();
                    child.visited.extend(cand.via.iter().copied());
                    child.visited.insert(cand.target);
                    child.route.push(cand.target);
                    child.distance += cand.distance;
                    children.push(child);
                }
            }

            children.sort_by(rank);
            children.truncate(self.beam_width);
            if let Some(top) = children.first() {
                if rank(top, &best) == Ordering::Less {
                    best = top.clone();
                }
            }
            beam = children;
        }

        let timed_out = guard.expired();
        debug!(
            "beam: {} stops, distance {:.2}, {rounds} rounds, {} expansions{}",
            best.route.len(),
            best.distance,
            guard.expansions(),
            if timed_out { " (ceiling hit)" } else { "" }
        );
        Ok(Plan {
            sequence:        best.route,
            cost_estimate:   best.distance,
            energy_estimate: None,
            expansions:      guard.expansions(),
            timed_out,
        })
    }
}
