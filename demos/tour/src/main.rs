//! tour — end-to-end walk through the starpath route planner.
//!
//! Plans a route across a small two-cluster galaxy with every planner,
//! replays the Mode 2 plan in the simulator, blocks a link mid-route, and
//! writes `report.json`, `events.csv`, and `visits.csv`.
//!
//! ```text
//! RUST_LOG=info cargo run -p tour -- output/tour
//! ```

mod galaxy;

use std::path::PathBuf;
use std::time::Instant;

use anyhow::Result;
use log::{info, warn};

use sp_agent::TravelerBuilder;
use sp_core::{Health, Tuning};
use sp_planner::{
    BeamPlanner, CoveragePlanner, EnhancedGreedyPlanner, GreedyPlanner, PureGreedyPlanner, RoutePlanner,
};
use sp_report::{CsvWriter, ReportObserver, RouteReport};
use sp_sim::SimBuilder;

use galaxy::build_galaxy;

// ── Constants ─────────────────────────────────────────────────────────────────

const DEFAULT_OUTPUT: &str = "output/tour";
/// Legs flown before a link on the route is blocked.
const LEGS_BEFORE_BLOCK: usize = 2;

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    env_logger::init();

    let out = std::env::args().nth(1).map(PathBuf::from).unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT));
    std::fs::create_dir_all(&out)?;

    println!("=== tour — starpath route planner ===");
    println!();

    // 1. Galaxy and traveler.
    let (galaxy, source) = build_galaxy()?;
    println!(
        "Galaxy: {} locations, {} links, {} clusters, {} shared, {} audit warnings",
        galaxy.location_count(),
        galaxy.link_count(),
        galaxy.clusters().count(),
        galaxy.shared_locations().count(),
        galaxy.audit()
    );

    let tuning = Tuning::default();
    let traveler = TravelerBuilder::new("Platero")
        .health(Health::Good)
        .energy_pct(70.0)
        .resource(40.0)
        .age(850.0)
        .max_age(1_000.0)
        .build()?;
    println!(
        "Traveler: {} ({}), energy {:.0}%, resource {:.0}, life {:.0}",
        traveler.name,
        traveler.health,
        traveler.energy_pct,
        traveler.resource,
        traveler.life_remaining()
    );
    println!();

    // 2. Plan with every planner.
    let planners: Vec<Box<dyn RoutePlanner>> = vec![
        Box::new(GreedyPlanner::new(tuning.clone())),
        Box::new(EnhancedGreedyPlanner::new(tuning.clone())),
        Box::new(PureGreedyPlanner::new(tuning.clone())),
        Box::new(CoveragePlanner::mode1()),
        Box::new(CoveragePlanner::mode2()),
        Box::new(BeamPlanner::default()),
    ];

    println!("{:<16} {:>6} {:>10} {:>11} {:>9}", "Planner", "Stops", "Cost", "Expansions", "Timeout");
    println!("{}", "-".repeat(56));
    for planner in &planners {
        let t0 = Instant::now();
        let plan = planner.plan(&galaxy, source, &traveler)?;
        info!("{} planned in {:.3} ms", planner.name(), t0.elapsed().as_secs_f64() * 1e3);
        println!(
            "{:<16} {:>6} {:>10.1} {:>11} {:>9}",
            planner.name(),
            plan.stops(),
            plan.cost_estimate,
            plan.expansions,
            if plan.timed_out { "yes" } else { "no" }
        );
    }
    println!();

    // 3. Simulate the Mode 2 plan.
    let planner = CoveragePlanner::mode2();
    let plan = planner.plan(&galaxy, source, &traveler)?;
    let route: Vec<String> = plan.sequence.iter().map(|id| id.get().to_string()).collect();
    println!("Mode 2 route: {}", route.join(" → "));

    let mut sim = SimBuilder::new(galaxy.clone(), traveler.clone(), plan.sequence.clone())
        .tuning(tuning.clone())
        .build()?;
    let writer = CsvWriter::new(&out)?;
    let mut obs = ReportObserver::new(writer, sim.graph());

    for _ in 0..LEGS_BEFORE_BLOCK {
        sim.step_observed(&mut obs);
    }

    // 4. Block the next leg and let the simulator detour (or stop).
    if !sim.state().is_terminal() {
        let here = sim.route()[sim.index()];
        if let Some(&next) = sim.route().get(sim.index() + 1) {
            sim.toggle_block(here, next, Some(true));
            warn!("blocked {here} <-> {next} mid-route");
            println!("Blocked {here} <-> {next} after {LEGS_BEFORE_BLOCK} legs");
        }
    }
    sim.run_all_observed(&mut obs);

    if let Some(e) = obs.take_error() {
        return Err(e.into());
    }

    // 5. Report.
    let report = RouteReport::for_plan(&galaxy, &traveler, &tuning, planner.name(), &plan).with_simulation(&sim);
    report.save_json(&out.join("report.json"))?;

    let state = sim.state();
    println!();
    println!(
        "Simulation {:?} at tick {}: energy {:.1}%, resource {:.1}, life {:.1}, health {}",
        state.phase(),
        state.tick,
        state.energy_pct,
        state.resource,
        state.life_remaining,
        state.health
    );
    println!();
    println!("{:<6} {:<16} {:>8} {:>8} {:>8}", "Tick", "Location", "Energy", "Life", "Health");
    println!("{}", "-".repeat(50));
    for v in &state.visits {
        let label = sim.graph().location(v.location).map(|l| l.label.as_str()).unwrap_or_default();
        println!(
            "{:<6} {:<16} {:>8.1} {:>8.1} {:>8}",
            v.tick, label, v.energy_after, v.life_after, v.health_after
        );
    }
    println!();
    println!("Wrote report.json, events.csv, visits.csv to {}", out.display());

    Ok(())
}
