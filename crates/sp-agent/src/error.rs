use thiserror::Error;

#[derive(Debug, Error)]
pub enum AgentError {
    #[error("traveler field {field} has invalid value {value}")]
    Invalid { field: &'static str, value: f64 },
}

pub type AgentResult<T> = Result<T, AgentError>;
