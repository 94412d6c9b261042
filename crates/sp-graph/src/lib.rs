//! `sp-graph` — locations, clusters, blockable links, and shortest paths.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                     |
//! |---------------|--------------------------------------------------------------|
//! | [`location`]  | `Location`, `Link`, `Cluster`                                |
//! | [`graph`]     | `Graph` — adjacency, cluster membership, R-tree picking      |
//! | [`shortest`]  | `shortest_paths`, `ShortestPaths`, `reconstruct_path`        |
//! | [`error`]     | `GraphError`, `GraphResult<T>`                               |
//!
//! # Before first use
//!
//! A graph assembled from external data should have
//! [`Graph::ensure_bidirectional`] and [`Graph::recompute_shared_flags`]
//! run once before any planner or simulator sees it.
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                       |
//! |---------|--------------------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on `Location`, `Link`, `Cluster`. |

pub mod error;
pub mod graph;
pub mod location;
pub mod shortest;


pub use error::{GraphError, GraphResult};
pub use graph::Graph;
pub use location::{Cluster, Link, Location};
pub use shortest::{ShortestPaths, distance_between, reconstruct_path, shortest_paths};
