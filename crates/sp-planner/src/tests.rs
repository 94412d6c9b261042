//! Unit tests for sp-planner.
//!
//! Hand-crafted graphs pin down selection rules; seeded random graphs
//! check the properties every planner must hold.

#[cfg(test)]
mod helpers {
    use std::time::Duration;

    use rand::rngs::SmallRng;
    use rand::{Rng, SeedableRng};

    use sp_agent::{Traveler, TravelerBuilder};
    use sp_core::{LocationId, SearchLimits};
    use sp_graph::{Graph, Location};

    use crate::{BeamPlanner, CoveragePlanner, EnhancedGreedyPlanner, GreedyPlanner, PureGreedyPlanner, RoutePlanner};

    pub fn id(n: u32) -> LocationId {
        LocationId(n)
    }

    /// Locations `0..n` joined by the given two-way links.
    pub fn graph(n: u32, links: &[(u32, u32, f64)]) -> Graph {
        let mut g = Graph::new();
        for i in 0..n {
            g.add_location(Location::new(id(i), format!("S{i}"))).unwrap();
        }
        for &(a, b, w) in links {
            g.add_link(id(a), id(b), w, false).unwrap();
        }
        g.ensure_bidirectional();
        g
    }

    /// Stock traveler (energy 100 %, resource 300) with the given life.
    pub fn traveler(life: f64) -> Traveler {
        TravelerBuilder::new("Platero").max_age(life).build().unwrap()
    }

    /// Deterministic, effectively unbounded search limits.
    pub fn generous() -> SearchLimits {
        SearchLimits::with_ceiling(Duration::from_secs(30)).max_expansions(5_000)
    }

    pub fn all_planners() -> Vec<Box<dyn RoutePlanner>> {
        vec![
            Box::new(GreedyPlanner::default()),
            Box::new(EnhancedGreedyPlanner::default()),
            Box::new(PureGreedyPlanner::default()),
            Box::new(CoveragePlanner::mode1().with_limits(generous())),
            Box::new(CoveragePlanner::mode2().with_limits(generous())),
            Box::new(BeamPlanner::new(generous())),
        ]
    }

    /// Connected random graph: a random spanning chain plus extra links,
    /// about a tenth of them blocked.
    pub fn random_graph(seed: u64, n: u32) -> Graph {
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut g = Graph::new();
        for i in 0..n {
            g.add_location(Location::new(id(i), format!("R{i}"))).unwrap();
        }
        for i in 1..n {
            let j = rng.gen_range(0..i);
            g.add_link(id(i), id(j), rng.gen_range(1.0..20.0), false).unwrap();
        }
        for _ in 0..n {
            let a = rng.gen_range(0..n);
            let b = rng.gen_range(0..n);
            if a != b {
                g.add_link(id(a), id(b), rng.gen_range(1.0..20.0), rng.gen_bool(0.1)).unwrap();
            }
        }
        g.ensure_bidirectional();
        g
    }
}

// ── Shared contract ───────────────────────────────────────────────────────────

#[cfg(test)]
mod contract {
    use sp_agent::TravelerBuilder;

    use super::helpers::*;
    use crate::PlanError;

    #[test]
    fn unknown_source_rejected_by_every_planner() {
        let g = graph(2, &[(0, 1, 1.0)]);
        let t = traveler(100.0);
        for p in all_planners() {
            let err = p.plan(&g, id(9), &t).unwrap_err();
            assert!(matches!(err, PlanError::UnknownSource(s) if s == id(9)), "{}", p.name());
        }
    }

    #[test]
    fn exhausted_traveler_gets_trivial_plan() {
        let g = graph(3, &[(0, 1, 1.0), (1, 2, 1.0)]);
        let t = TravelerBuilder::new("old").age(50.0).max_age(50.0).build().unwrap();
        for p in all_planners() {
            let plan = p.plan(&g, id(1), &t).unwrap();
            assert_eq!(plan.sequence, vec![id(1)], "{}", p.name());
            assert_eq!(plan.cost_estimate, 0.0, "{}", p.name());
        }
    }

    #[test]
    fn isolated_source_stays_put() {
        let g = graph(3, &[(1, 2, 1.0)]);
        for p in all_planners() {
            let plan = p.plan(&g, id(0), &traveler(100.0)).unwrap();
            assert_eq!(plan.sequence, vec![id(0)], "{}", p.name());
        }
    }

    #[test]
    fn stale_plan_detects_blocked_leg() {
        let mut g = graph(2, &[(0, 1, 4.0)]);
        let plan = all_planners()[0].plan(&g, id(0), &traveler(100.0)).unwrap();
        assert_eq!(plan.route_distance(&g).unwrap(), Some(4.0));
        g.toggle_block(id(0), id(1), Some(true));
        assert_eq!(plan.route_distance(&g).unwrap(), None);
    }
}

// ── Greedy variants ───────────────────────────────────────────────────────────

#[cfg(test)]
mod greedy {
    use sp_agent::TravelerBuilder;
    use sp_core::{Health, Tuning};

    use super::helpers::*;
    use crate::{EnhancedGreedyPlanner, GreedyPlanner, PureGreedyPlanner, RoutePlanner};

    #[test]
    fn stops_when_budget_runs_out() {
        let g = graph(4, &[(0, 1, 5.0), (1, 2, 5.0), (2, 3, 5.0)]);
        let plan = GreedyPlanner::default().plan(&g, id(0), &traveler(12.0)).unwrap();
        assert_eq!(plan.sequence, vec![id(0), id(1), id(2)]);
        assert_eq!(plan.cost_estimate, 10.0);
    }

    #[test]
    fn passes_through_visited_hub_without_relisting() {
        // Star: hub 0, leaves 1, 2, 3.
        let g = graph(4, &[(0, 1, 1.0), (0, 2, 2.0), (0, 3, 3.0)]);
        let plan = GreedyPlanner::default().plan(&g, id(0), &traveler(100.0)).unwrap();
        assert_eq!(plan.sequence, vec![id(0), id(1), id(2), id(3)]);
        assert_eq!(plan.cost_estimate, 1.0 + 3.0 + 5.0);
        assert_eq!(plan.route_distance(&g).unwrap(), Some(9.0));
    }

    #[test]
    fn enhanced_lists_unvisited_intermediates() {
        let mut g = graph(3, &[(0, 1, 1.0), (1, 2, 1.0)]);
        // Visit cost of 1 = 100 × 1.0 × 0.5 = 50; far cheaper to aim for 2.
        g.location_mut(id(1)).unwrap().research_cost = 100.0;
        let plan = EnhancedGreedyPlanner::default().plan(&g, id(0), &traveler(100.0)).unwrap();
        assert_eq!(plan.sequence, vec![id(0), id(1), id(2)]);
        assert_eq!(plan.cost_estimate, 2.0);
    }

    #[test]
    fn enhanced_recharge_extends_reach() {
        let mut g = graph(3, &[(0, 1, 30.0), (1, 2, 25.0)]);
        g.location_mut(id(1)).unwrap().supernode = true;
        let t = TravelerBuilder::new("tired")
            .health(Health::Poor)
            .energy_pct(40.0)
            .resource(0.0)
            .build()
            .unwrap();

        let plain = GreedyPlanner::default().plan(&g, id(0), &t).unwrap();
        assert_eq!(plain.sequence, vec![id(0), id(1)]);

        let (plan, after) = EnhancedGreedyPlanner::default().plan_with_effects(&g, id(0), &t).unwrap();
        assert_eq!(plan.sequence, vec![id(0), id(1), id(2)]);
        assert_eq!(plan.cost_estimate, 55.0);
        assert_eq!(after.energy_pct, 60.0);
        assert_eq!(after.health, Health::Poor);
        // The caller's traveler is untouched.
        assert_eq!(t.energy_pct, 40.0);
    }

    #[test]
    fn enhanced_recharge_keeps_health_label() {
        let mut g = graph(3, &[(0, 1, 10.0), (1, 2, 100.0)]);
        g.location_mut(id(1)).unwrap().supernode = true;
        let t = TravelerBuilder::new("tired")
            .health(Health::Poor)
            .energy_pct(40.0)
            .resource(10.0)
            .build()
            .unwrap();

        // After the recharge: 60 + 20 × gain(Poor) = 100, short of 10 + 100.
        let (plan, after) = EnhancedGreedyPlanner::default().plan_with_effects(&g, id(0), &t).unwrap();
        assert_eq!(plan.sequence, vec![id(0), id(1)]);
        assert_eq!(plan.cost_estimate, 10.0);
        assert_eq!(after.health, Health::Poor);
        assert_eq!(after.resource, 20.0);
        assert_eq!(after.energy_budget(&Tuning::default()), 100.0);
    }

    #[test]
    fn pure_respects_energy_budget() {
        let g = graph(3, &[(0, 1, 10.0), (1, 2, 10.0)]);
        let t = TravelerBuilder::new("t").energy_pct(10.0).resource(0.0).build().unwrap();
        let plan = PureGreedyPlanner::default().plan(&g, id(0), &t).unwrap();
        // Each leg costs 0.6 × 10 = 6 energy; only one fits under 10.
        assert_eq!(plan.sequence, vec![id(0), id(1)]);
        assert_eq!(plan.cost_estimate, 10.0);
        assert_eq!(plan.energy_estimate, Some(6.0));
    }

    #[test]
    fn pure_respects_life_budget() {
        let g = graph(3, &[(0, 1, 10.0), (1, 2, 10.0)]);
        let plan = PureGreedyPlanner::default().plan(&g, id(0), &traveler(15.0)).unwrap();
        assert_eq!(plan.sequence, vec![id(0), id(1)]);
    }

    #[test]
    fn pure_is_reproducible() {
        let g = random_graph(7, 12);
        let t = traveler(60.0);
        let p = PureGreedyPlanner::default();
        assert_eq!(p.plan(&g, id(0), &t).unwrap(), p.plan(&g, id(0), &t).unwrap());
    }
}

// ── Bounded search ────────────────────────────────────────────────────────────

#[cfg(test)]
mod bounded {
    use std::time::Duration;

    use sp_core::SearchLimits;

    use super::helpers::*;
    use crate::{BeamPlanner, CoveragePlanner, GreedyPlanner, PlanError, RoutePlanner};

    /// Short dead-end spur next to a longer chain.
    ///
    /// ```text
    /// 1 ─1.5─ 0 ─2─ 2 ─2─ 3 ─2─ 4
    /// ```
    fn spur() -> sp_graph::Graph {
        graph(5, &[(0, 1, 1.5), (0, 2, 2.0), (2, 3, 2.0), (3, 4, 2.0)])
    }

    #[test]
    fn scenario_insufficient_life() {
        let g = graph(2, &[(0, 1, 10.0)]);
        let plan = CoveragePlanner::mode1().plan(&g, id(0), &traveler(5.0)).unwrap();
        assert_eq!(plan.sequence, vec![id(0)]);
        assert_eq!(plan.cost_estimate, 0.0);
    }

    #[test]
    fn scenario_sufficient_life() {
        let g = graph(2, &[(0, 1, 10.0)]);
        let plan = CoveragePlanner::mode1().plan(&g, id(0), &traveler(20.0)).unwrap();
        assert_eq!(plan.sequence, vec![id(0), id(1)]);
        assert_eq!(plan.cost_estimate, 10.0);
        assert!(!plan.timed_out);
    }

    #[test]
    fn coverage_beats_nearest_first() {
        let g = spur();
        let t = traveler(6.5);
        let greedy = GreedyPlanner::default().plan(&g, id(0), &t).unwrap();
        assert_eq!(greedy.stops(), 3);

        let plan = CoveragePlanner::mode2().with_limits(generous()).plan(&g, id(0), &t).unwrap();
        assert_eq!(plan.sequence, vec![id(0), id(2), id(3), id(4)]);
        assert_eq!(plan.cost_estimate, 6.0);
    }

    #[test]
    fn equal_stops_prefer_shorter() {
        // 0→1→2 costs 11, 0→3→4 costs 4; both are three stops.
        let g = graph(5, &[(0, 1, 1.0), (1, 2, 10.0), (0, 3, 2.0), (3, 4, 2.0)]);
        let plan = CoveragePlanner::mode2().with_limits(generous()).plan(&g, id(0), &traveler(11.0)).unwrap();
        assert_eq!(plan.sequence, vec![id(0), id(3), id(4)]);
        assert_eq!(plan.cost_estimate, 4.0);
    }

    #[test]
    fn zero_ceiling_returns_source() {
        let g = spur();
        let limits = SearchLimits::with_ceiling(Duration::ZERO);
        let plan = CoveragePlanner::new(limits).plan(&g, id(0), &traveler(100.0)).unwrap();
        assert_eq!(plan.sequence, vec![id(0)]);
        assert!(plan.timed_out);
    }

    #[test]
    fn expansion_cap_keeps_best_so_far() {
        let g = spur();
        let limits = SearchLimits::with_ceiling(Duration::from_secs(30)).max_expansions(1);
        let plan = CoveragePlanner::new(limits).plan(&g, id(0), &traveler(6.5)).unwrap();
        assert_eq!(plan.sequence, vec![id(0), id(1)]);
        assert_eq!(plan.expansions, 1);
        assert!(plan.timed_out);
    }

    #[test]
    fn full_coverage_ends_early() {
        let g = graph(3, &[(0, 1, 1.0), (1, 2, 1.0), (0, 2, 1.0)]);
        let plan = CoveragePlanner::mode2().plan(&g, id(0), &traveler(100.0)).unwrap();
        assert_eq!(plan.stops(), 3);
        assert!(!plan.timed_out);
    }

    #[test]
    fn beam_matches_dfs_on_small_graph() {
        let g = spur();
        let plan = BeamPlanner::new(generous()).plan(&g, id(0), &traveler(6.5)).unwrap();
        assert_eq!(plan.sequence, vec![id(0), id(2), id(3), id(4)]);
        assert_eq!(plan.cost_estimate, 6.0);
    }

    #[test]
    fn narrow_beam_loses_coverage() {
        let g = spur();
        let plan = BeamPlanner::new(generous()).beam_width(1).plan(&g, id(0), &traveler(6.5)).unwrap();
        assert_eq!(plan.sequence, vec![id(0), id(1)]);
    }

    #[test]
    fn beam_rejects_zero_width() {
        let g = spur();
        let err = BeamPlanner::default().beam_width(0).plan(&g, id(0), &traveler(6.5)).unwrap_err();
        assert!(matches!(err, PlanError::InvalidLimits(_)));
    }

    #[test]
    fn huge_beam_does_not_overflow() {
        let g = spur();
        let plan = BeamPlanner::new(generous())
            .beam_width(usize::MAX)
            .branching(usize::MAX)
            .plan(&g, id(0), &traveler(6.5))
            .unwrap();
        assert_eq!(plan.sequence, vec![id(0), id(2), id(3), id(4)]);
    }
}

// ── Properties over random graphs ─────────────────────────────────────────────

#[cfg(test)]
mod properties {
    use std::collections::HashSet;

    use sp_graph::shortest_paths;

    use super::helpers::*;

    #[test]
    fn no_duplicates_and_cost_matches_legs() {
        for seed in 0..8 {
            let g = random_graph(seed, 10);
            let t = traveler(60.0);
            for p in all_planners() {
                let plan = p.plan(&g, id(0), &t).unwrap();
                assert_eq!(plan.source(), Some(id(0)));
                assert!(plan.is_simple(), "seed {seed} {}: {:?}", p.name(), plan.sequence);
                let legs = plan.route_distance(&g).unwrap().expect("every leg reachable");
                assert!(
                    (legs - plan.cost_estimate).abs() < 1e-6,
                    "seed {seed} {}: legs {legs} vs cost {}",
                    p.name(),
                    plan.cost_estimate
                );
                assert!(plan.cost_estimate <= 60.0 + 1e-9, "seed {seed} {}", p.name());
            }
        }
    }

    #[test]
    fn bounded_routes_never_pass_a_location_twice() {
        for seed in 0..8 {
            let g = random_graph(seed, 10);
            for p in all_planners().into_iter().skip(3) {
                let plan = p.plan(&g, id(0), &traveler(60.0)).unwrap();
                let mut walked: HashSet<_> = HashSet::from([id(0)]);
                for pair in plan.sequence.windows(2) {
                    let path = shortest_paths(&g, pair[0], false).unwrap().path_to(pair[1]);
                    for node in path.into_iter().skip(1) {
                        assert!(walked.insert(node), "seed {seed} {}: {node} passed twice", p.name());
                    }
                }
            }
        }
    }
}
