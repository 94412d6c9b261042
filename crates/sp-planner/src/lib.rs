//! `sp-planner` — route planners over a [`sp_graph::Graph`] and a
//! [`sp_agent::Traveler`] snapshot.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                      |
//! |---------------|---------------------------------------------------------------|
//! | [`plan`]      | `Plan`, the `RoutePlanner` trait                              |
//! | [`budget`]    | energy / life / combined budgets, static visit cost           |
//! | [`greedy`]    | `GreedyPlanner`, `EnhancedGreedyPlanner`, `PureGreedyPlanner` |
//! | [`coverage`]  | `CoveragePlanner` — bounded DFS ("Mode 1" / "Mode 2")         |
//! | [`beam`]      | `BeamPlanner` — width-limited search ("Mode 2++")             |
//! | [`error`]     | `PlanError`, `PlanResult<T>`                                  |
//!
//! # Guarantees
//!
//! Every planner returns a sequence that starts at the source, contains no
//! duplicate id, and whose consecutive legs are reachable over unblocked
//! links at planning time.  Bounded planners honour a soft
//! [`SearchLimits`](sp_core::SearchLimits) ceiling and always return their
//! best complete route so far.
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use sp_planner::{CoveragePlanner, RoutePlanner};
//!
//! let plan = CoveragePlanner::mode2().plan(&graph, source, &traveler)?;
//! println!("{} stops, {:.1} distance", plan.stops(), plan.cost_estimate);
//! ```

pub mod beam;
pub mod budget;
pub mod coverage;
pub mod error;
pub mod greedy;
pub mod plan;

#[cfg(test)]
mod tests;

pub use beam::BeamPlanner;
pub use coverage::CoveragePlanner;
pub use error::{PlanError, PlanResult};
pub use greedy::{EnhancedGreedyPlanner, GreedyPlanner, PureGreedyPlanner};
pub use plan::{Plan, RoutePlanner};
