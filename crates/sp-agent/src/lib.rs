//! `sp-agent` — the traveler whose budgets drive every planner.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                   |
//! |---------------|------------------------------------------------------------|
//! | [`traveler`]  | `Traveler`, derived budgets, super-node recharge helpers   |
//! | [`builder`]   | `TravelerBuilder`, `validate`                              |
//! | [`error`]     | `AgentError`, `AgentResult<T>`                             |
//!
//! # Derived quantities
//!
//! ```text
//! life_remaining = max(0, max_age − age)
//! energy_budget  = energy_pct + resource × gain_per_unit(health)
//! ```

pub mod builder;
pub mod error;
pub mod traveler;


pub use builder::{TravelerBuilder, validate};
pub use error::{AgentError, AgentResult};
pub use traveler::{Traveler, supernode_energy, supernode_resource};
