//! Unit tests for sp-report.

#[cfg(test)]
mod helpers {
    use sp_agent::{Traveler, TravelerBuilder};
    use sp_core::{LocationId, Position};
    use sp_graph::{Graph, Location};
    use sp_sim::{SimBuilder, Simulator};

    pub fn id(n: u32) -> LocationId {
        LocationId(n)
    }

    /// Vega (0) ─ Deneb (1, super-node, in both clusters) ─ Altair (2).
    pub fn summer_triangle() -> Graph {
        let mut g = Graph::new();
        for (i, name) in ["Vega", "Deneb", "Altair"].into_iter().enumerate() {
            let mut loc = Location::new(id(i as u32), name).with_position(Position::new(i as f32 * 3.0, 1.0));
            if i == 1 {
                loc = loc.supernode();
            }
            g.add_location(loc).unwrap();
        }
        g.add_link(id(0), id(1), 10.0, false).unwrap();
        g.add_link(id(1), id(2), 15.0, false).unwrap();
        g.ensure_bidirectional();
        g.add_to_cluster("Lyra", id(0)).unwrap();
        g.add_to_cluster("Lyra", id(1)).unwrap();
        g.add_to_cluster("Cygnus", id(1)).unwrap();
        g.add_to_cluster("Aquila", id(2)).unwrap();
        g
    }

    pub fn traveler() -> Traveler {
        TravelerBuilder::new("Platero").resource(20.0).build().unwrap()
    }

    pub fn simulator() -> Simulator {
        SimBuilder::new(summer_triangle(), traveler(), vec![id(0), id(1), id(2)])
            .build()
            .unwrap()
    }
}

// ── RouteReport ───────────────────────────────────────────────────────────────

#[cfg(test)]
mod report {
    use sp_core::Tuning;
    use sp_planner::{CoveragePlanner, RoutePlanner};
    use sp_sim::SimPhase;

    use super::helpers::*;
    use crate::RouteReport;

    #[test]
    fn stops_carry_cluster_facts() {
        let g = summer_triangle();
        let r = RouteReport::new(&g, &traveler(), &Tuning::default(), &[id(0), id(1), id(2)], 25.0);
        assert_eq!(r.route_length, 3);
        assert_eq!(r.cost_estimate, 25.0);
        let deneb = &r.stops[1];
        assert_eq!(deneb.label, "Deneb");
        assert_eq!(deneb.clusters, vec!["Cygnus".to_owned(), "Lyra".to_owned()]);
        assert!(deneb.supernode);
        assert!(deneb.shared);
        assert!(!r.stops[0].shared);
        assert!(r.planner.is_none());
    }

    #[test]
    fn traveler_budgets_summarised() {
        let g = summer_triangle();
        let r = RouteReport::new(&g, &traveler(), &Tuning::default(), &[id(0)], 0.0);
        assert_eq!(r.traveler.name, "Platero");
        assert_eq!(r.traveler.life_remaining, 1_000.0);
        // 100 + 20 × 5
        assert_eq!(r.traveler.energy_budget, 200.0);
    }

    #[test]
    fn unknown_stop_skipped_but_counted() {
        let g = summer_triangle();
        let r = RouteReport::new(&g, &traveler(), &Tuning::default(), &[id(0), id(42)], 0.0);
        assert_eq!(r.route_length, 2);
        assert_eq!(r.stops.len(), 1);
    }

    #[test]
    fn plan_and_simulation_attached() {
        let g = summer_triangle();
        let t = traveler();
        let planner = CoveragePlanner::mode2();
        let plan = planner.plan(&g, id(0), &t).unwrap();

        let mut sim = sp_sim::SimBuilder::new(g.clone(), t.clone(), plan.sequence.clone()).build().unwrap();
        sim.run_all();

        let r = RouteReport::for_plan(&g, &t, &Tuning::default(), planner.name(), &plan).with_simulation(&sim);
        assert_eq!(r.planner.as_deref(), Some("mode2"));
        assert_eq!(r.route_length, 3);
        let s = r.simulation.as_ref().unwrap();
        assert_eq!(s.phase, SimPhase::Finished);
        assert_eq!(s.ticks, 2);
        assert_eq!(s.events.len(), 3);
        assert_eq!(s.visits.len(), 2);
    }

    #[test]
    fn json_uses_lowercase_labels() {
        let mut sim = simulator();
        sim.run_all();
        let r = RouteReport::new(sim.graph(), &traveler(), &Tuning::default(), sim.route(), 25.0).with_simulation(&sim);
        let json = r.to_json_pretty().unwrap();
        assert!(json.contains("\"health\": \"excellent\""));
        assert!(json.contains("\"phase\": \"finished\""));
        assert!(json.contains("\"type\": \"visit\""));
        assert!(!json.contains("\"planner\""));
        assert_eq!(RouteReport::from_json(&json).unwrap(), r);
    }

    #[test]
    fn saves_to_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("report.json");
        let g = summer_triangle();
        RouteReport::new(&g, &traveler(), &Tuning::default(), &[id(2), id(1)], 15.0)
            .save_json(&path)
            .unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["route_length"], 2);
        assert_eq!(value["stops"][0]["label"], "Altair");
        assert_eq!(value["stops"][1]["index"], 1);
    }
}

// ── CSV log ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod csv_log {
    use std::fs;

    use super::helpers::*;
    use crate::csv::{EVENTS_FILE, VISITS_FILE};
    use crate::{CsvWriter, LogWriter, ReportObserver};

    #[test]
    fn observer_writes_both_files() {
        let dir = tempfile::tempdir().unwrap();
        let mut sim = simulator();
        let writer = CsvWriter::new(dir.path()).unwrap();
        let mut obs = ReportObserver::new(writer, sim.graph());
        sim.run_all_observed(&mut obs);
        assert!(obs.take_error().is_none());

        let events = fs::read_to_string(dir.path().join(EVENTS_FILE)).unwrap();
        let lines: Vec<&str> = events.lines().collect();
        assert_eq!(lines.len(), 1 + sim.export_log().len());
        assert!(lines[0].starts_with("tick,event,location,label"));
        assert!(lines[1].starts_with("1,visit,1,Deneb,"), "{}", lines[1]);
        assert!(lines[1].ends_with(",1,10"), "{}", lines[1]);
        assert!(lines[3].starts_with("2,finish,2,Altair,"), "{}", lines[3]);

        let visits = fs::read_to_string(dir.path().join(VISITS_FILE)).unwrap();
        assert_eq!(visits.lines().count(), 1 + sim.state().visits.len());
    }

    #[test]
    fn finish_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let mut writer = CsvWriter::new(dir.path()).unwrap();
        writer.finish().unwrap();
        writer.finish().unwrap();
        let events = fs::read_to_string(dir.path().join(EVENTS_FILE)).unwrap();
        assert_eq!(events.lines().count(), 1);
    }

    #[test]
    fn missing_directory_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = CsvWriter::new(&dir.path().join("nope"));
        assert!(result.is_err());
    }
}

// ── Error capture ─────────────────────────────────────────────────────────────

#[cfg(test)]
mod errors {
    use std::io;

    use super::helpers::*;
    use crate::{EventRow, LogWriter, ReportError, ReportObserver, ReportResult, VisitRow};

    /// Fails every event write; counts attempts.
    #[derive(Default)]
    struct Broken {
        attempts: usize,
    }

    impl LogWriter for Broken {
        fn write_event(&mut self, _row: &EventRow) -> ReportResult<()> {
            self.attempts += 1;
            Err(io::Error::other(format!("disk full #{}", self.attempts)).into())
        }
        fn write_visit(&mut self, _row: &VisitRow) -> ReportResult<()> {
            Ok(())
        }
        fn finish(&mut self) -> ReportResult<()> {
            Ok(())
        }
    }

    #[test]
    fn first_error_kept() {
        let mut sim = simulator();
        let mut obs = ReportObserver::new(Broken::default(), sim.graph());
        sim.run_all_observed(&mut obs);

        let err = obs.take_error().unwrap();
        assert!(matches!(err, ReportError::Io(_)));
        assert!(err.to_string().contains("#1"));
        assert!(obs.take_error().is_none());
        assert_eq!(obs.into_writer().attempts, 3);
    }
}
