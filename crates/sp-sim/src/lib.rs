//! `sp-sim` — step-wise simulator that replays a planned route.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                    |
//! |--------------|-------------------------------------------------------------|
//! | [`sim`]      | `Simulator` — `step`, `run_all`, `teleport_and_visit`       |
//! | [`builder`]  | `SimBuilder`                                                |
//! | [`state`]    | `SimulationState`, `SimPhase`, `VisitRecord`                |
//! | [`event`]    | `SimEvent`, `EventKind`                                     |
//! | [`observer`] | `SimObserver`, `NoopObserver`                               |
//! | [`error`]    | `SimError`, `SimResult<T>`                                  |
//!
//! # Stopping conditions
//!
//! Runtime stops are data, never errors: a blocked leg ends the run as
//! `Finished` with a `BlockedRoute` event, exhaustion ends it as `Dead`
//! with a `Death` event.  Only construction can fail.
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use sp_sim::SimBuilder;
//!
//! let mut sim = SimBuilder::new(graph, traveler, plan.sequence).build()?;
//! sim.step();
//! sim.toggle_block(a, b, Some(true)); // live edit between steps
//! sim.run_all();
//! for event in sim.export_log() { println!("{} at {}", event.kind, event.location); }
//! ```

pub mod builder;
pub mod error;
pub mod event;
pub mod observer;
pub mod sim;
pub mod state;


pub use builder::SimBuilder;
pub use error::{SimError, SimResult};
pub use event::{EventKind, SimEvent};
pub use observer::{NoopObserver, SimObserver};
pub use sim::Simulator;
pub use state::{SimPhase, SimulationState, VisitRecord};
