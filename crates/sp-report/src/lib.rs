//! `sp-report` — read-only summaries of a planned and simulated route.
//!
//! | Output            | Producer                         | Files            |
//! |-------------------|----------------------------------|------------------|
//! | Route report      | [`RouteReport`] (serde JSON)     | `report.json`    |
//! | Simulation log    | [`ReportObserver`] + [`CsvWriter`] | `events.csv`, `visits.csv` |
//!
//! Log backends implement [`LogWriter`] and are driven by
//! [`ReportObserver`], which implements `sp_sim::SimObserver`.
//!
//! # Usage
//!
//! ```rust,ignore
//! use sp_report::{CsvWriter, ReportObserver, RouteReport};
//!
//! let writer = CsvWriter::new(Path::new("./out"))?;
//! let mut obs = ReportObserver::new(writer, sim.graph());
//! sim.run_all_observed(&mut obs);
//! if let Some(e) = obs.take_error() { eprintln!("log error: {e}"); }
//!
//! RouteReport::for_plan(&graph, &traveler, &tuning, "mode2", &plan)
//!     .with_simulation(&sim)
//!     .save_json(Path::new("./out/report.json"))?;
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod report;
pub mod row;
pub mod writer;

#[cfg(test)]
mod tests;

pub use crate::csv::CsvWriter;
pub use error::{ReportError, ReportResult};
pub use observer::ReportObserver;
pub use report::{RouteReport, SimulationSummary, StopSummary, TravelerSummary};
pub use row::{EventRow, VisitRow};
pub use writer::LogWriter;
