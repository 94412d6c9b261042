//! CSV log backend.
//!
//! Creates two files in the configured output directory:
//! - `events.csv`
//! - `visits.csv`

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::writer::LogWriter;
use crate::{EventRow, ReportResult, VisitRow};

pub const EVENTS_FILE: &str = "events.csv";
pub const VISITS_FILE: &str = "visits.csv";

/// Writes the simulation log to two CSV files.
pub struct CsvWriter {
    events:   Writer<File>,
    visits:   Writer<File>,
    finished: bool,
}

impl CsvWriter {
    /// Open (or create) the two CSV files in `dir` and write the header rows.
    pub fn new(dir: &Path) -> ReportResult<Self> {
        let mut events = Writer::from_path(dir.join(EVENTS_FILE))?;
        events.write_record([
            "tick", "event", "location", "label", "energy_pct", "resource",
            "life_remaining", "health", "supernode", "distance",
        ])?;

        let mut visits = Writer::from_path(dir.join(VISITS_FILE))?;
        visits.write_record([
            "tick", "location", "label", "teleported", "supernode",
            "eat_time", "research_time", "resource_eaten", "energy_gained", "research_spent", "life_delta",
            "energy_before", "energy_after", "resource_before", "resource_after",
            "life_before", "life_after", "health_before", "health_after",
        ])?;

        Ok(Self { events, visits, finished: false })
    }
}

impl LogWriter for CsvWriter {
    fn write_event(&mut self, row: &EventRow) -> ReportResult<()> {
        self.events.write_record(&[
            row.tick.to_string(),
            row.event.to_owned(),
            row.location.to_string(),
            row.label.clone(),
            row.energy_pct.to_string(),
            row.resource.to_string(),
            row.life_remaining.to_string(),
            row.health.to_owned(),
            (row.supernode as u8).to_string(),
            row.distance.map(|d| d.to_string()).unwrap_or_default(),
        ])?;
        Ok(())
    }

    fn write_visit(&mut self, row: &VisitRow) -> ReportResult<()> {
        self.visits.write_record(&[
            row.tick.to_string(),
            row.location.to_string(),
            row.label.clone(),
            (row.teleported as u8).to_string(),
            (row.supernode as u8).to_string(),
            row.eat_time.to_string(),
            row.research_time.to_string(),
            row.resource_eaten.to_string(),
            row.energy_gained.to_string(),
            row.research_spent.to_string(),
            row.life_delta.to_string(),
            row.energy_before.to_string(),
            row.energy_after.to_string(),
            row.resource_before.to_string(),
            row.resource_after.to_string(),
            row.life_before.to_string(),
            row.life_after.to_string(),
            row.health_before.to_owned(),
            row.health_after.to_owned(),
        ])?;
        Ok(())
    }

    fn finish(&mut self) -> ReportResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.events.flush()?;
        self.visits.flush()?;
        Ok(())
    }
}
