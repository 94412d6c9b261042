//! Presentation-ready route summary.
//!
//! A [`RouteReport`] is built from read-only snapshots and never feeds
//! anything back into the graph, the planners, or the simulator.
//!
//! ```json
//! {
//!   "traveler": { "name": "Platero", "health": "excellent", ... },
//!   "planner": "mode2",
//!   "route_length": 4,
//!   "cost_estimate": 42.5,
//!   "stops": [ { "index": 0, "id": 3, "label": "Vega", ... }, ... ],
//!   "simulation": { "phase": "finished", "events": [...], "visits": [...] }
//! }
//! ```

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use log::warn;
use serde::{Deserialize, Serialize};

use sp_agent::Traveler;
use sp_core::{Health, LocationId, Tuning};
use sp_graph::Graph;
use sp_planner::Plan;
use sp_sim::{SimEvent, SimPhase, Simulator, VisitRecord};

use crate::ReportResult;

/// The traveler's initial values and derived budgets.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TravelerSummary {
    pub id:             Option<u32>,
    pub name:           String,
    pub health:         Health,
    pub energy_pct:     f64,
    pub resource:       f64,
    pub age:            f64,
    pub max_age:        f64,
    pub life_remaining: f64,
    pub energy_budget:  f64,
}

impl TravelerSummary {
    pub fn new(traveler: &Traveler, tuning: &Tuning) -> Self {
        Self {
            id:             traveler.id.map(|id| id.get()),
            name:           traveler.name.clone(),
            health:         traveler.health,
            energy_pct:     traveler.energy_pct,
            resource:       traveler.resource,
            age:            traveler.age,
            max_age:        traveler.max_age,
            life_remaining: traveler.life_remaining(),
            energy_budget:  traveler.energy_budget(tuning),
        }
    }
}

/// One planned stop with the facts a viewer shows next to it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StopSummary {
    pub index:     usize,
    pub id:        u32,
    pub label:     String,
    pub clusters:  Vec<String>,
    pub supernode: bool,
    pub shared:    bool,
}

/// Outcome of a simulated run.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SimulationSummary {
    pub phase:          SimPhase,
    pub ticks:          u64,
    pub final_location: u32,
    pub energy_pct:     f64,
    pub resource:       f64,
    pub life_remaining: f64,
    pub health:         Health,
    pub events:         Vec<SimEvent>,
    pub visits:         Vec<VisitRecord>,
}

impl SimulationSummary {
    pub fn new(sim: &Simulator) -> Self {
        let s = sim.state();
        Self {
            phase:          s.phase(),
            ticks:          s.tick,
            final_location: s.current.get(),
            energy_pct:     s.energy_pct,
            resource:       s.resource,
            life_remaining: s.life_remaining,
            health:         s.health,
            events:         sim.export_log().to_vec(),
            visits:         s.visits.clone(),
        }
    }
}

/// Summary of a planned (and optionally simulated) route.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RouteReport {
    pub traveler:      TravelerSummary,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub planner:       Option<String>,
    pub route_length:  usize,
    pub cost_estimate: f64,
    pub stops:         Vec<StopSummary>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub simulation:    Option<SimulationSummary>,
}

impl RouteReport {
    /// Summarise `sequence`.  Ids missing from `graph` are skipped with a
    /// warning; `route_length` still counts them.
    pub fn new(
        graph:         &Graph,
        traveler:      &Traveler,
        tuning:        &Tuning,
        sequence:      &[LocationId],
        cost_estimate: f64,
    ) -> Self {
        let stops = sequence
            .iter()
            .enumerate()
            .filter_map(|(index, &id)| {
                let Some(loc) = graph.location(id) else {
                    warn!("report skips unknown location {id}");
                    return None;
                };
                Some(StopSummary {
                    index,
                    id:        id.get(),
                    label:     loc.label.clone(),
                    clusters:  loc.clusters().to_vec(),
                    supernode: loc.supernode,
                    shared:    loc.is_shared(),
                })
            })
            .collect();

        Self {
            traveler: TravelerSummary::new(traveler, tuning),
            planner: None,
            route_length: sequence.len(),
            cost_estimate,
            stops,
            simulation: None,
        }
    }

    /// Summarise a planner's output.
    pub fn for_plan(
        graph:    &Graph,
        traveler: &Traveler,
        tuning:   &Tuning,
        planner:  &str,
        plan:     &Plan,
    ) -> Self {
        let mut report = Self::new(graph, traveler, tuning, &plan.sequence, plan.cost_estimate);
        report.planner = Some(planner.to_owned());
        report
    }

    /// Attach the outcome of a simulated run.
    pub fn with_simulation(mut self, sim: &Simulator) -> Self {
        self.simulation = Some(SimulationSummary::new(sim));
        self
    }

    pub fn to_json_pretty(&self) -> ReportResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json(json: &str) -> ReportResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Write the report as pretty-printed JSON to `path`.
    pub fn save_json(&self, path: &Path) -> ReportResult<()> {
        let mut out = BufWriter::new(File::create(path)?);
        serde_json::to_writer_pretty(&mut out, self)?;
        out.write_all(b"\n")?;
        out.flush()?;
        Ok(())
    }
}
