//! Fluent builder for constructing a [`Simulator`].

use sp_agent::Traveler;
use sp_core::{LocationId, Tuning};
use sp_graph::Graph;

use crate::{SimError, SimResult, Simulator};

/// Fluent builder for [`Simulator`].
///
/// # Required inputs
///
/// - [`Graph`] — moved into the simulator, which owns it from then on; edit
///   links between steps through [`Simulator::graph_mut`].
/// - [`Traveler`] — initial values only; the simulator keeps its own live
///   state.
/// - The planned sequence (non-empty, every id in the graph).
///
/// # Optional inputs (have defaults)
///
/// | Method        | Default             |
/// |---------------|---------------------|
/// | `.tuning(t)`  | `Tuning::default()` |
///
/// # Example
///
/// ```rust,ignore
/// let mut sim = SimBuilder::new(graph, traveler, plan.sequence)
///     .tuning(tuning)
///     .build()?;
/// sim.run_all();
/// ```
pub struct SimBuilder {
    graph:    Graph,
    traveler: Traveler,
    sequence: Vec<LocationId>,
    tuning:   Option<Tuning>,
}

impl SimBuilder {
    pub fn new(graph: Graph, traveler: Traveler, sequence: Vec<LocationId>) -> Self {
        Self { graph, traveler, sequence, tuning: None }
    }

    pub fn tuning(mut self, tuning: Tuning) -> Self {
        self.tuning = Some(tuning);
        self
    }

    /// Validate inputs and return a simulator positioned at the first
    /// planned location.
    pub fn build(self) -> SimResult<Simulator> {
        let tuning = self.tuning.unwrap_or_default();
        tuning.validate()?;
        sp_agent::validate(&self.traveler)?;

        if self.sequence.is_empty() {
            return Err(SimError::EmptySequence);
        }
        if let Some(&missing) = self.sequence.iter().find(|&&id| !self.graph.contains(id)) {
            return Err(SimError::UnknownLocation(missing));
        }

        Ok(Simulator::new(self.graph, self.traveler, self.sequence, tuning))
    }
}
