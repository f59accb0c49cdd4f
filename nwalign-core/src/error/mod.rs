//! Core error types for nwalign

use thiserror::Error;

/// Main error type for nwalign operations
#[derive(Error, Debug)]
pub enum NwalignError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Parsing error: {0}")]
    Parse(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Other error: {0}")]
    Other(String),
}

/// Result type alias for nwalign operations
pub type NwalignResult<T> = Result<T, NwalignError>;

impl NwalignError {
    /// Process exit code the CLI reports for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            NwalignError::Configuration(_) => 2,
            NwalignError::Io(_) | NwalignError::NotFound(_) => 3,
            NwalignError::Parse(_) | NwalignError::Serialization(_) => 4,
            NwalignError::Other(_) => 1,
        }
    }
}

// Conversion implementations for common error types
impl From<serde_json::Error> for NwalignError {
    fn from(err: serde_json::Error) -> Self {
        NwalignError::Serialization(err.to_string())
    }
}

impl From<anyhow::Error> for NwalignError {
    fn from(err: anyhow::Error) -> Self {
        NwalignError::Other(err.to_string())
    }
}
