/*!
 * Error Types
 * Centralized error handling with thiserror, miette, and serde support
 */

use miette::Diagnostic;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Simulation errors with serialization support
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Diagnostic)]
#[serde(tag = "error_type", content = "details", rename_all = "snake_case")]
pub enum SimError {
    #[error("Invalid input: {0}")]
    #[diagnostic(
        code(sim::invalid_input),
        help("Check the submitted processes, trace, or resource snapshot against the engine's input constraints.")
    )]
    InvalidInput(String),

    #[error("Unknown algorithm: {0}")]
    #[diagnostic(
        code(sim::unknown_algorithm),
        help("Use one of the algorithm names listed for the selected engine.")
    )]
    UnknownAlgorithm(String),

    #[error("Worker unavailable: {0}")]
    #[diagnostic(
        code(sim::worker_unavailable),
        help("The engine pool has shut down. Create a new pool before submitting requests.")
    )]
    WorkerUnavailable(String),
}

impl SimError {
    /// Shorthand for building an [`SimError::InvalidInput`]
    pub fn invalid(msg: impl Into<String>) -> Self {
        SimError::InvalidInput(msg.into())
    }
}

/// Serializable error representation for responses
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub struct SerializableError {
    pub error_type: String,
    pub message: String,
}

impl SerializableError {
    /// Create a new serializable error
    pub fn new(error_type: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            error_type: error_type.into(),
            message: message.into(),
        }
    }
}

impl From<SimError> for SerializableError {
    fn from(err: SimError) -> Self {
        let error_type = match &err {
            SimError::InvalidInput(_) => "invalid_input",
            SimError::UnknownAlgorithm(_) => "unknown_algorithm",
            SimError::WorkerUnavailable(_) => "worker_unavailable",
        };
        SerializableError::new(error_type, err.to_string())
    }
}

/// Result type for engine operations
pub type SimResult<T> = std::result::Result<T, SimError>;
