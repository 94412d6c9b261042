use sp_core::LocationId;
use sp_graph::GraphError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PlanError {
    #[error("source location {0} is not in the graph")]
    UnknownSource(LocationId),

    #[error("invalid search limits: {0}")]
    InvalidLimits(String),

    #[error("graph error during planning: {0}")]
    Graph(#[from] GraphError),
}

pub type PlanResult<T> = Result<T, PlanError>;
