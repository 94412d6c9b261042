//! The `LogWriter` trait implemented by simulation log backends.

use crate::{EventRow, ReportResult, VisitRow};

/// Sink for flattened simulation log rows.
///
/// Errors surface to [`ReportObserver`][crate::ReportObserver], which keeps
/// the first one for [`take_error`][crate::ReportObserver::take_error].
pub trait LogWriter {
    fn write_event(&mut self, row: &EventRow) -> ReportResult<()>;

    fn write_visit(&mut self, row: &VisitRow) -> ReportResult<()>;

    /// Flush and close all underlying handles.
    ///
    /// Idempotent.
    fn finish(&mut self) -> ReportResult<()>;
}
