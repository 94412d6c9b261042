//! Observer trait for streaming simulator output.

use crate::{SimEvent, SimulationState, VisitRecord};

/// Callbacks invoked by [`Simulator`][crate::Simulator] as it steps.
///
/// All methods have default no-op implementations so implementors only
/// override what they care about.
///
/// # Example: event printer
///
/// ```rust,ignore
/// struct Printer;
///
/// impl SimObserver for Printer {
///     fn on_event(&mut self, event: &SimEvent) {
///         println!("tick {}: {} at {}", event.tick, event.kind, event.location);
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called for every entry appended to the event log.
    fn on_event(&mut self, _event: &SimEvent) {}

    /// Called after each first-time visit is applied.
    fn on_visit(&mut self, _visit: &VisitRecord) {}

    /// Called once, when the run becomes finished or dead.
    fn on_finish(&mut self, _state: &SimulationState) {}
}

/// A [`SimObserver`] that does nothing.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
