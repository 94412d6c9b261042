//! Live simulation state and per-visit audit records.

use sp_core::{Health, LocationId};

/// Coarse phase of the stepper.  Dwelling at a location is part of
/// `Running`; presentation layers may animate it separately.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum SimPhase {
    Running,
    Finished,
    Dead,
}

/// Before/after snapshot of every quantity a single visit touched.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VisitRecord {
    pub location: LocationId,
    /// Tick at which the visit happened (teleports do not advance it).
    pub tick:     u64,

    /// Session time spent eating.
    pub eat_time:      f64,
    /// Session time spent on research.
    pub research_time: f64,

    pub resource_eaten: f64,
    pub energy_gained:  f64,
    pub research_spent: f64,
    pub life_delta:     f64,

    pub energy_before:   f64,
    pub resource_before: f64,
    pub life_before:     f64,
    pub health_before:   Health,

    pub energy_after:   f64,
    pub resource_after: f64,
    pub life_after:     f64,
    pub health_after:   Health,

    /// The location recharged the traveler.
    pub supernode:  bool,
    /// Reached by teleport rather than by travel.
    pub teleported: bool,
}

/// Everything the simulator mutates.
///
/// Created from the traveler's initial values; changed only by
/// [`Simulator`][crate::Simulator] and frozen once `finished` or `dead` is
/// set.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimulationState {
    pub current:        LocationId,
    pub energy_pct:     f64,
    pub resource:       f64,
    pub life_remaining: f64,
    pub health:         Health,
    /// Completed legs.  Never decreases.
    pub tick:           u64,
    pub finished:       bool,
    pub dead:           bool,
    pub visits:         Vec<VisitRecord>,
}

impl SimulationState {
    pub fn phase(&self) -> SimPhase {
        if self.dead {
            SimPhase::Dead
        } else if self.finished {
            SimPhase::Finished
        } else {
            SimPhase::Running
        }
    }

    #[inline]
    pub fn is_terminal(&self) -> bool {
        self.finished || self.dead
    }
}
