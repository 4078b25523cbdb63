//! Error types for the gen commands

use thiserror::Error;

/// Result type alias for gen operations
pub type Result<T> = std::result::Result<T, GenError>;

/// Errors that can occur while generating an artifact
#[derive(Debug, Error)]
pub enum GenError {
    /// Bad size, shell name or argument, rejected before any side effect
    #[error("{0}")]
    InvalidParameter(String),

    /// The secure random source could not supply the requested bytes
    #[error("{0}")]
    RandomSource(String),

    /// IO error
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl GenError {
    pub fn invalid_parameter(msg: impl Into<String>) -> Self {
        GenError::InvalidParameter(msg.into())
    }

    /// True for errors raised before anything was written
    pub fn is_invalid_parameter(&self) -> bool {
        matches!(self, GenError::InvalidParameter(_))
    }
}

impl From<csv::Error> for GenError {
    fn from(e: csv::Error) -> Self {
        GenError::Io(e.into())
    }
}

impl From<serde_json::Error> for GenError {
    fn from(e: serde_json::Error) -> Self {
        GenError::InvalidParameter(format!("invalid config file: {}", e))
    }
}
