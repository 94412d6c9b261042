use sp_agent::AgentError;
use sp_core::{CoreError, LocationId};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("planned sequence is empty")]
    EmptySequence,

    #[error("location {0} is not in the graph")]
    UnknownLocation(LocationId),

    #[error("simulation configuration error: {0}")]
    Config(#[from] CoreError),

    #[error("invalid traveler: {0}")]
    Traveler(#[from] AgentError),
}

pub type SimResult<T> = Result<T, SimError>;
