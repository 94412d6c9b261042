//! Fluent builder for constructing a validated [`Traveler`].
//!
//! # Usage
//!
//! ```rust
//! use sp_agent::TravelerBuilder;
//! use sp_core::Health;
//!
//! let traveler = TravelerBuilder::new("Platero")
//!     .health(Health::Fair)
//!     .energy_pct(80.0)
//!     .resource(12.0)
//!     .age(3.0)
//!     .max_age(40.0)
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(traveler.life_remaining(), 37.0);
//! ```

use sp_core::{Health, TravelerId};

use crate::{AgentError, AgentResult, Traveler};

/// Fluent builder for [`Traveler`].
///
/// Unset fields take the stock defaults:
///
/// | Field        | Default     |
/// |--------------|-------------|
/// | `health`     | `Excellent` |
/// | `energy_pct` | 100         |
/// | `resource`   | 300         |
/// | `age`        | 0           |
/// | `max_age`    | 1000        |
pub struct TravelerBuilder {
    traveler: Traveler,
}

impl TravelerBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            traveler: Traveler {
                id:         None,
                name:       name.into(),
                health:     Health::Excellent,
                energy_pct: 100.0,
                resource:   300.0,
                age:        0.0,
                max_age:    1_000.0,
            },
        }
    }

    pub fn id(mut self, id: TravelerId) -> Self {
        self.traveler.id = Some(id);
        self
    }

    pub fn health(mut self, health: Health) -> Self {
        self.traveler.health = health;
        self
    }

    pub fn energy_pct(mut self, energy_pct: f64) -> Self {
        self.traveler.energy_pct = energy_pct;
        self
    }

    pub fn resource(mut self, resource: f64) -> Self {
        self.traveler.resource = resource;
        self
    }

    pub fn age(mut self, age: f64) -> Self {
        self.traveler.age = age;
        self
    }

    pub fn max_age(mut self, max_age: f64) -> Self {
        self.traveler.max_age = max_age;
        self
    }

    /// Validate ranges and return the traveler.
    pub fn build(self) -> AgentResult<Traveler> {
        validate(&self.traveler)?;
        Ok(self.traveler)
    }
}

/// Check the invariants every constructed traveler must satisfy.
pub fn validate(t: &Traveler) -> AgentResult<()> {
    let checks: [(&'static str, f64, bool); 4] = [
        ("energy_pct", t.energy_pct, (0.0..=100.0).contains(&t.energy_pct)),
        ("resource",   t.resource,   t.resource.is_finite() && t.resource >= 0.0),
        ("age",        t.age,        t.age.is_finite() && t.age >= 0.0),
        ("max_age",    t.max_age,    t.max_age.is_finite() && t.max_age >= 0.0),
    ];
    match checks.into_iter().find(|(_, _, ok)| !ok) {
        Some((field, value, _)) => Err(AgentError::Invalid { field, value }),
        None => Ok(()),
    }
}
