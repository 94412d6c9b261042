//! Qualitative health labels and per-label lookup tables.
//!
//! Health is ordered worst → best so `a < b` reads as "a is worse than b".
//! `Dead` is terminal: once reached, [`Health::settle`] never leaves it.

use std::fmt;
use std::str::FromStr;

use crate::CoreError;

/// The traveler's health label.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Health {
    Dead,
    Dying,
    Poor,
    Fair,
    Good,
    #[default]
    Excellent,
}

impl Health {
    /// Every label, worst first.
    pub const ALL: [Health; 6] = [
        Health::Dead,
        Health::Dying,
        Health::Poor,
        Health::Fair,
        Health::Good,
        Health::Excellent,
    ];

    /// Label implied by an energy percentage.
    ///
    /// | Energy        | Label       |
    /// |---------------|-------------|
    /// | `<= 0`        | `Dead`      |
    /// | `(0, 25]`     | `Dying`     |
    /// | `(25, 50]`    | `Poor`      |
    /// | `(50, 75]`    | `Fair`      |
    /// | `> 75`        | `Excellent` |
    ///
    /// Boundary values take the worse label.
    ///
    /// `Good` is never derived; it only enters through initial
    /// configuration or a location override.
    pub fn from_energy(energy_pct: f64) -> Health {
        if energy_pct <= 0.0 {
            Health::Dead
        } else if energy_pct <= 25.0 {
            Health::Dying
        } else if energy_pct <= 50.0 {
            Health::Poor
        } else if energy_pct <= 75.0 {
            Health::Fair
        } else {
            Health::Excellent
        }
    }

    /// Re-derive health after energy moved from `energy_before` to
    /// `energy_after`.
    ///
    /// Worsening is applied immediately.  Improvement is only accepted when
    /// energy actually went up, so a traveler configured as `Good` at 90 %
    /// stays `Good` while walking instead of being promoted to `Excellent`.
    pub fn settle(self, energy_before: f64, energy_after: f64) -> Health {
        if self == Health::Dead {
            return Health::Dead;
        }
        let derived = Health::from_energy(energy_after);
        if derived < self || (derived > self && energy_after > energy_before) {
            derived
        } else {
            self
        }
    }

    #[inline]
    pub fn is_alive(self) -> bool {
        self != Health::Dead
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Health::Dead      => "dead",
            Health::Dying     => "dying",
            Health::Poor      => "poor",
            Health::Fair      => "fair",
            Health::Good      => "good",
            Health::Excellent => "excellent",
        }
    }
}

impl fmt::Display for Health {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Health {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Health::ALL
            .into_iter()
            .find(|h| h.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| CoreError::Parse(format!("unknown health label {wanted:?}")))
    }
}

// ── HealthTable ───────────────────────────────────────────────────────────────

/// One `f64` per health label.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HealthTable {
    pub excellent: f64,
    pub good:      f64,
    pub fair:      f64,
    pub poor:      f64,
    pub dying:     f64,
    pub dead:      f64,
}

impl HealthTable {
    #[inline]
    pub fn get(&self, health: Health) -> f64 {
        match health {
            Health::Excellent => self.excellent,
            Health::Good      => self.good,
            Health::Fair      => self.fair,
            Health::Poor      => self.poor,
            Health::Dying     => self.dying,
            Health::Dead      => self.dead,
        }
    }

    pub fn set(&mut self, health: Health, value: f64) {
        let slot = match health {
            Health::Excellent => &mut self.excellent,
            Health::Good      => &mut self.good,
            Health::Fair      => &mut self.fair,
            Health::Poor      => &mut self.poor,
            Health::Dying     => &mut self.dying,
            Health::Dead      => &mut self.dead,
        };
        *slot = value;
    }

    /// Iterate `(label, value)` pairs, worst first.
    pub fn iter(&self) -> impl Iterator<Item = (Health, f64)> + '_ {
        Health::ALL.into_iter().map(move |h| (h, self.get(h)))
    }
}
