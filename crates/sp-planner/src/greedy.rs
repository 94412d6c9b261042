//! Nearest-first greedy planners.
//!
//! All three repeatedly run a fresh shortest-path search from the current
//! position and move to the cheapest unvisited location that still fits the
//! remaining budget.  They differ in what "cheapest" and "fits" mean:
//!
//! | Planner                   | Selection cost          | Budget                          | Effects |
//! |---------------------------|-------------------------|---------------------------------|---------|
//! | [`GreedyPlanner`]         | distance                | `min(energy, life)`             | none    |
//! | [`EnhancedGreedyPlanner`] | distance + visit cost   | `min(energy, life)`, recomputed | super-node recharge |
//! | [`PureGreedyPlanner`]     | energy need + life need | energy and life, separately     | none    |
//!
//! The first two list every unvisited location on the travelled path, so a
//! simulator replaying the plan never passes an unlisted stop.  The pure
//! variant lists destinations only.

use std::collections::HashSet;

use log::debug;

use sp_agent::Traveler;
use sp_core::{LocationId, Tuning};
use sp_graph::{Graph, shortest_paths};

use crate::budget::{combined_budget, energy_budget, life_budget, movement_factor, static_visit_cost};
use crate::plan::check_source;
use crate::{Plan, PlanResult, RoutePlanner};

// ── Shared selection loop ─────────────────────────────────────────────────────

struct Pick {
    target:     LocationId,
    move_cost:  f64,
    visit_cost: f64,
}

/// Greedy loop for the plain and enhanced variants.  `traveler` is only
/// touched when `effects` is set.
fn walk(
    graph:      &Graph,
    source:     LocationId,
    traveler:   &mut Traveler,
    tuning:     &Tuning,
    visit_cost: bool,
    effects:    bool,
) -> PlanResult<Plan> {
    check_source(graph, source)?;
    let mut budget = combined_budget(traveler, tuning);
    if budget <= 0.0 {
        return Ok(Plan::trivial(source));
    }

    let mut visited: HashSet<LocationId> = HashSet::from([source]);
    let mut sequence = vec![source];
    let mut current = source;
    let mut used = 0.0;
    let mut distance = 0.0;
    let mut rounds = 0u64;

    loop {
        rounds += 1;
        let paths = shortest_paths(graph, current, false)?;

        let mut best: Option<Pick> = None;
        for loc in graph.locations() {
            let id = loc.id();
            if visited.contains(&id) {
                continue;
            }
            let Some(move_cost) = paths.distance(id) else { continue };
            let visit = if visit_cost { static_visit_cost(loc) } else { 0.0 };
            let total = move_cost + visit;
            if used + total > budget {
                continue;
            }
            if best.as_ref().is_none_or(|b| total < b.move_cost + b.visit_cost) {
                best = Some(Pick { target: id, move_cost, visit_cost: visit });
            }
        }
        let Some(pick) = best else { break };

        // Intermediates already visited are passed through, not re-listed.
        for node in paths.path_to(pick.target).into_iter().skip(1) {
            if visited.insert(node) {
                sequence.push(node);
            }
        }
        used += pick.move_cost + pick.visit_cost;
        distance += pick.move_cost;

        if effects && graph.location(pick.target).is_some_and(|l| l.supernode) {
            traveler.recharge(tuning);
            budget = combined_budget(traveler, tuning);
            debug!("super-node {} recharged plan budget to {budget:.2}", pick.target);
        }
        current = pick.target;
    }

    Ok(Plan {
        sequence,
        cost_estimate:   if visit_cost { used } else { distance },
        energy_estimate: visit_cost.then_some(used),
        expansions:      rounds,
        timed_out:       false,
    })
}

// ── GreedyPlanner ─────────────────────────────────────────────────────────────

/// Baseline nearest-with-budget planner.
#[derive(Clone, Debug, Default)]
pub struct GreedyPlanner {
    pub tuning: Tuning,
}

impl GreedyPlanner {
    pub fn new(tuning: Tuning) -> Self {
        Self { tuning }
    }
}

impl RoutePlanner for GreedyPlanner {
    fn name(&self) -> &'static str {
        "greedy"
    }

    fn plan(&self, graph: &Graph, source: LocationId, traveler: &Traveler) -> PlanResult<Plan> {
        let mut scratch = traveler.clone();
        let plan = walk(graph, source, &mut scratch, &self.tuning, false, false)?;
        debug!("greedy: {} stops, distance {:.2}", plan.stops(), plan.cost_estimate);
        Ok(plan)
    }
}

// ── EnhancedGreedyPlanner ─────────────────────────────────────────────────────

/// Greedy planner that charges a static visit cost and applies super-node
/// recharges while planning.
#[derive(Clone, Debug, Default)]
pub struct EnhancedGreedyPlanner {
    pub tuning: Tuning,
}

impl EnhancedGreedyPlanner {
    pub fn new(tuning: Tuning) -> Self {
        Self { tuning }
    }

    /// Plan and return the traveler as it would look after every recharge
    /// met along the way.  `traveler` itself is left untouched.
    pub fn plan_with_effects(
        &self,
        graph:    &Graph,
        source:   LocationId,
        traveler: &Traveler,
    ) -> PlanResult<(Plan, Traveler)> {
        let mut after = traveler.clone();
        let plan = walk(graph, source, &mut after, &self.tuning, true, true)?;
        debug!(
            "enhanced greedy: {} stops, cost {:.2}, energy after recharges {:.1}%",
            plan.stops(),
            plan.cost_estimate,
            after.energy_pct
        );
        Ok((plan, after))
    }
}

impl RoutePlanner for EnhancedGreedyPlanner {
    fn name(&self) -> &'static str {
        "enhanced-greedy"
    }

    fn plan(&self, graph: &Graph, source: LocationId, traveler: &Traveler) -> PlanResult<Plan> {
        self.plan_with_effects(graph, source, traveler).map(|(plan, _)| plan)
    }
}

// ── PureGreedyPlanner ─────────────────────────────────────────────────────────

/// Greedy planner over the traveler's initial values only.
///
/// Tracks an energy budget and a life budget side by side; a candidate is
/// eligible only when it fits under both.  Candidates are ranked by
/// `energy_need + life_need` where
///
/// ```text
/// energy_need = movement_factor(initial health) × distance + visit_cost
/// life_need   = distance
/// ```
///
/// Re-planning from the same inputs always yields the same plan.
#[derive(Clone, Debug, Default)]
pub struct PureGreedyPlanner {
    pub tuning: Tuning,
}

impl PureGreedyPlanner {
    pub fn new(tuning: Tuning) -> Self {
        Self { tuning }
    }
}

impl RoutePlanner for PureGreedyPlanner {
    fn name(&self) -> &'static str {
        "pure-greedy"
    }

    fn plan(&self, graph: &Graph, source: LocationId, traveler: &Traveler) -> PlanResult<Plan> {
        check_source(graph, source)?;
        let energy_cap = energy_budget(traveler, &self.tuning);
        let life_cap = life_budget(traveler);
        if energy_cap <= 0.0 || life_cap <= 0.0 {
            return Ok(Plan::trivial(source));
        }
        let factor = movement_factor(traveler, &self.tuning);

        let mut visited: HashSet<LocationId> = HashSet::from([source]);
        let mut sequence = vec![source];
        let mut current = source;
        let mut used_energy = 0.0;
        let mut used_life = 0.0;
        let mut rounds = 0u64;

        loop {
            rounds += 1;
            let paths = shortest_paths(graph, current, false)?;

            // (target, score, energy_need, life_need)
            let mut best: Option<(LocationId, f64, f64, f64)> = None;
            for loc in graph.locations() {
                let id = loc.id();
                if visited.contains(&id) {
                    continue;
                }
                let Some(d) = paths.distance(id) else { continue };
                let energy_need = factor * d + static_visit_cost(loc);
                let life_need = d;
                if used_energy + energy_need > energy_cap || used_life + life_need > life_cap {
                    continue;
                }
                let score = energy_need + life_need;
                if best.is_none_or(|(_, s, _, _)| score < s) {
                    best = Some((id, score, energy_need, life_need));
                }
            }
            let Some((target, _, energy_need, life_need)) = best else { break };

            sequence.push(target);
            visited.insert(target);
            used_energy += energy_need;
            used_life += life_need;
            current = target;
        }

        debug!(
            "pure greedy: {} stops, distance {used_life:.2}, energy {used_energy:.2}",
            sequence.len()
        );
        Ok(Plan {
            sequence,
            cost_estimate:   used_life,
            energy_estimate: Some(used_energy),
            expansions:      rounds,
            timed_out:       false,
        })
    }
}
