//! `ReportObserver<W>` bridges `SimObserver` to a `LogWriter`.

use std::collections::HashMap;

use sp_core::LocationId;
use sp_graph::Graph;
use sp_sim::{SimEvent, SimObserver, SimulationState, VisitRecord};

use crate::row::{EventRow, VisitRow};
use crate::writer::LogWriter;
use crate::{ReportError, ReportResult};

/// A [`SimObserver`] that streams events and visits to any [`LogWriter`].
///
/// Errors from the writer are stored internally because `SimObserver`
/// methods have no return value.  After the run, check with
/// [`take_error`][Self::take_error].
pub struct ReportObserver<W: LogWriter> {
    writer:     W,
    labels:     HashMap<LocationId, String>,
    last_error: Option<ReportError>,
}

impl<W: LogWriter> ReportObserver<W> {
    /// Create an observer backed by `writer`, taking location labels from
    /// `graph`.
    pub fn new(writer: W, graph: &Graph) -> Self {
        Self {
            writer,
            labels:     graph.locations().map(|l| (l.id(), l.label.clone())).collect(),
            last_error: None,
        }
    }

    /// Take the stored write error (if any).  `None` if all writes
    /// succeeded.
    pub fn take_error(&mut self) -> Option<ReportError> {
        self.last_error.take()
    }

    pub fn into_writer(self) -> W {
        self.writer
    }

    fn label(&self, id: LocationId) -> &str {
        self.labels.get(&id).map(String::as_str).unwrap_or_default()
    }

    fn store_err(&mut self, result: ReportResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: LogWriter> SimObserver for ReportObserver<W> {
    fn on_event(&mut self, event: &SimEvent) {
        let row = EventRow::from_event(event, self.label(event.location));
        let result = self.writer.write_event(&row);
        self.store_err(result);
    }

    fn on_visit(&mut self, visit: &VisitRecord) {
        let row = VisitRow::from_record(visit, self.label(visit.location));
        let result = self.writer.write_visit(&row);
        self.store_err(result);
    }

    fn on_finish(&mut self, _state: &SimulationState) {
        let result = self.writer.finish();
        self.store_err(result);
    }
}
