//! The traveler and its derived budgets.

use sp_core::{Health, TravelerId, Tuning};

/// A single traveler.
///
/// Planners only ever read a `Traveler` (or work on an explicit clone); the
/// simulator keeps its own live copy of the mutable quantities.  Construct
/// through [`TravelerBuilder`][crate::TravelerBuilder] to get validation.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Traveler {
    pub id: Option<TravelerId>,

    pub name: String,

    pub health: Health,

    /// Energy percentage in [0, 100].
    pub energy_pct: f64,

    /// Consumable resource quantity (non-negative).
    pub resource: f64,

    /// Current age, in the same unit as link weights.
    pub age: f64,

    /// Life ceiling.  Travel stops being possible once `age` reaches it.
    pub max_age: f64,
}

impl Traveler {
    /// `max(0, max_age − age)`.
    #[inline]
    pub fn life_remaining(&self) -> f64 {
        (self.max_age - self.age).max(0.0)
    }

    /// Energy gained per unit of resource at the current health.
    #[inline]
    pub fn gain_per_unit(&self, tuning: &Tuning) -> f64 {
        tuning.gain_per_unit(self.health)
    }

    /// `energy + resource × gain_per_unit(health)`, floored at zero.
    pub fn energy_budget(&self, tuning: &Tuning) -> f64 {
        (self.energy_pct + self.resource * self.gain_per_unit(tuning)).max(0.0)
    }

    pub fn is_alive(&self) -> bool {
        self.health.is_alive() && self.energy_pct > 0.0 && self.life_remaining() > 0.0
    }

    /// Apply a super-node recharge: energy grows by `recharge_fraction` of
    /// itself (capped at 100) and the resource is multiplied.
    ///
    /// Health is left as it was; only the simulator re-derives it.
    pub fn recharge(&mut self, tuning: &Tuning) {
        self.energy_pct = supernode_energy(self.energy_pct, tuning);
        self.resource = supernode_resource(self.resource, tuning);
    }
}

/// Energy after a super-node visit.
#[inline]
pub fn supernode_energy(energy_pct: f64, tuning: &Tuning) -> f64 {
    (energy_pct * (1.0 + tuning.supernode_recharge_fraction.max(0.0))).min(100.0)
}

/// Resource quantity after a super-node visit.
#[inline]
pub fn supernode_resource(resource: f64, tuning: &Tuning) -> f64 {
    resource * tuning.supernode_resource_multiplier.max(1.0)
}
