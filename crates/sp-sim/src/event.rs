//! The simulator's event log.

use std::fmt;

use sp_core::{Health, LocationId};

#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "type", rename_all = "snake_case"))]
pub enum EventKind {
    /// Arrived at `location` after travelling `distance`.
    Visit { distance: f64 },
    /// Jumped to `location` at no movement cost.
    Teleport,
    /// The leg to `next` became unreachable; the run stopped in place.
    BlockedRoute { next: LocationId },
    /// The last planned location was reached.
    Finish,
    /// Energy, life, or health ran out.
    Death,
}

impl EventKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            EventKind::Visit { .. }        => "visit",
            EventKind::Teleport            => "teleport",
            EventKind::BlockedRoute { .. } => "blocked_route",
            EventKind::Finish              => "finish",
            EventKind::Death               => "death",
        }
    }

    /// Distance travelled for `Visit` events.
    pub fn distance(&self) -> Option<f64> {
        match self {
            EventKind::Visit { distance } => Some(*distance),
            _ => None,
        }
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One log entry: what happened, where, and the traveler's state right
/// after it.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimEvent {
    pub tick:           u64,
    pub kind:           EventKind,
    pub location:       LocationId,
    pub energy_pct:     f64,
    pub resource:       f64,
    pub life_remaining: f64,
    pub health:         Health,
    pub supernode:      bool,
}
