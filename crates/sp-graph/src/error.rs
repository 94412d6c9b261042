//! Graph-subsystem error type.

use thiserror::Error;

use sp_core::LocationId;

/// Errors produced by `sp-graph`.
///
/// All of these are construction errors or an unknown source handed to
/// [`shortest_paths`][crate::shortest_paths]; unreachable targets are not
/// errors (they are simply absent from [`ShortestPaths`][crate::ShortestPaths]).
#[derive(Debug, Error)]
pub enum GraphError {
    #[error("location {0} not found in graph")]
    UnknownLocation(LocationId),

    #[error("location {0} already exists")]
    DuplicateLocation(LocationId),

    #[error("link {from} -> {to} has invalid weight {weight}")]
    InvalidWeight {
        from:   LocationId,
        to:     LocationId,
        weight: f64,
    },
}

pub type GraphResult<T> = Result<T, GraphError>;
