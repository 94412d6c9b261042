//! Gameplay tunables shared by the planners and the simulator.
//!
//! A `Tuning` value is passed explicitly to whatever needs it; there is no
//! process-wide configuration.  `Tuning::default()` reproduces the stock
//! values and an application may load an override from its own config
//! file (with the `serde` feature enabled).

use crate::{CoreError, CoreResult, Health, HealthTable};

/// All tunables consumed by budget computation and step simulation.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Tuning {
    /// Energy percentage points spent per unit of distance, by health.
    pub movement_factor: HealthTable,

    /// Energy percentage points gained per unit of resource eaten, by health.
    pub energy_gain_per_unit: HealthTable,

    /// Eating only happens when energy is strictly below this percentage.
    pub eat_threshold_pct: f64,

    /// Largest share of a visit session that may be spent eating, in [0, 1].
    pub max_eat_fraction: f64,

    /// A super-node raises energy by this fraction of its current value.
    pub supernode_recharge_fraction: f64,

    /// A super-node multiplies the resource quantity by this factor.
    pub supernode_resource_multiplier: f64,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            movement_factor: HealthTable {
                excellent: 0.6,
                good:      0.75,
                fair:      0.8,
                poor:      1.0,
                dying:     1.3,
                dead:      1.3,
            },
            energy_gain_per_unit: HealthTable {
                excellent: 5.0,
                good:      4.0,
                fair:      3.0,
                poor:      2.0,
                dying:     0.5,
                dead:      0.0,
            },
            eat_threshold_pct:             50.0,
            max_eat_fraction:              0.5,
            supernode_recharge_fraction:   0.5,
            supernode_resource_multiplier: 2.0,
        }
    }
}

impl Tuning {
    #[inline]
    pub fn movement_factor(&self, health: Health) -> f64 {
        self.movement_factor.get(health)
    }

    #[inline]
    pub fn gain_per_unit(&self, health: Health) -> f64 {
        self.energy_gain_per_unit.get(health)
    }

    /// Reject values that would make energy or resource arithmetic
    /// meaningless.
    pub fn validate(&self) -> CoreResult<()> {
        for (label, table) in [
            ("movement_factor", &self.movement_factor),
            ("energy_gain_per_unit", &self.energy_gain_per_unit),
        ] {
            if let Some((health, v)) = table.iter().find(|(_, v)| !v.is_finite() || *v < 0.0) {
                return Err(CoreError::Config(format!(
                    "{label}[{health}] must be a non-negative number, got {v}"
                )));
            }
        }
        if !(0.0..=100.0).contains(&self.eat_threshold_pct) {
            return Err(CoreError::Config(format!(
                "eat_threshold_pct must be in [0, 100], got {}",
                self.eat_threshold_pct
            )));
        }
        if !(0.0..=1.0).contains(&self.max_eat_fraction) {
            return Err(CoreError::Config(format!(
                "max_eat_fraction must be in [0, 1], got {}",
                self.max_eat_fraction
            )));
        }
        if !self.supernode_recharge_fraction.is_finite() || self.supernode_recharge_fraction < 0.0 {
            return Err(CoreError::Config(format!(
                "supernode_recharge_fraction must be >= 0, got {}",
                self.supernode_recharge_fraction
            )));
        }
        if !self.supernode_resource_multiplier.is_finite() || self.supernode_resource_multiplier < 1.0 {
            return Err(CoreError::Config(format!(
                "supernode_resource_multiplier must be >= 1, got {}",
                self.supernode_resource_multiplier
            )));
        }
        Ok(())
    }
}
