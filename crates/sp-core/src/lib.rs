//! `sp-core` — foundational types for the `starpath` workspace.
//!
//! Every other `sp-*` crate depends on this one.  It has no `sp-*`
//! dependencies and a single required external one (`thiserror`, plus
//! optional `serde`).
//!
//! # What lives here
//!
//! | Module       | Contents                                              |
//! |--------------|-------------------------------------------------------|
//! | [`ids`]      | `LocationId`, `TravelerId`                            |
//! | [`geo`]      | `Position` (UI-only planar geometry)                  |
//! | [`health`]   | `Health` labels, `HealthTable`                        |
//! | [`tuning`]   | `Tuning` — every gameplay tunable, explicit value     |
//! | [`search`]   | `SearchLimits`, `SearchGuard` for anytime planners    |
//! | [`error`]    | `CoreError`, `CoreResult`                             |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod error;
pub mod geo;
pub mod health;
pub mod ids;
pub mod search;
pub mod tuning;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{CoreError, CoreResult};
pub use geo::Position;
pub use health::{Health, HealthTable};
pub use ids::{LocationId, TravelerId};
pub use search::{SearchGuard, SearchLimits};
pub use tuning::Tuning;
