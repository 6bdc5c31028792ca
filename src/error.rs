//! Crate-level error type.

use thiserror::Error;

use crate::validation::ValidationError;

/// Simulation operation result.
pub type SimulationResult<T> = Result<T, SimulationError>;

/// Errors reported before or around a simulation run.
///
/// A run itself cannot fail once its input has passed validation.
#[derive(Error, Debug)]
pub enum SimulationError {
    #[error("invalid simulation input: {}", summarize(.0))]
    Invalid(Vec<ValidationError>),

    #[error("unknown policy token: {0:?}")]
    InvalidPolicy(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed request: {0}")]
    Json(#[from] serde_json::Error),
}

fn summarize(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}

impl From<Vec<ValidationError>> for SimulationError {
    fn from(errors: Vec<ValidationError>) -> Self {
        SimulationError::Invalid(errors)
    }
}
