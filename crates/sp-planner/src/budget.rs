//! Budget arithmetic shared by the planners.
//!
//! Planners only ever read the traveler's initial values through these
//! helpers; nothing here mutates a [`Traveler`].
//!
//! ```text
//! energy_budget   = energy_pct + resource × gain_per_unit(health)
//! life_budget     = max(0, max_age − age)
//! combined_budget = max(0, min(energy_budget, life_budget))
//! visit_cost      = research_cost × dwell_time × 0.5
//! ```

use sp_agent::Traveler;
use sp_core::Tuning;
use sp_graph::Location;

/// Share of a visit session assumed to be spent on research when planning.
const RESEARCH_SHARE: f64 = 0.5;

#[inline]
pub fn energy_budget(traveler: &Traveler, tuning: &Tuning) -> f64 {
    traveler.energy_budget(tuning)
}

#[inline]
pub fn life_budget(traveler: &Traveler) -> f64 {
    traveler.life_remaining()
}

/// The energy budget capped by the life budget.
pub fn combined_budget(traveler: &Traveler, tuning: &Tuning) -> f64 {
    energy_budget(traveler, tuning).min(life_budget(traveler)).max(0.0)
}

/// Static energy estimate for researching at `location`.
pub fn static_visit_cost(location: &Location) -> f64 {
    (location.research_cost * location.dwell_time * RESEARCH_SHARE).max(0.0)
}

/// Energy spent per unit of distance at the traveler's current health.
#[inline]
pub fn movement_factor(traveler: &Traveler, tuning: &Tuning) -> f64 {
    tuning.movement_factor(traveler.health)
}
