//! Error types for semparse-core.

use thiserror::Error;

/// Result type for semparse-core operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for document-model operations.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// Invalid input provided (e.g. a span outside its sentence).
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Parse error (e.g. an unrecognised tag name).
    #[error("Parse error: {0}")]
    Parse(String),
}

impl Error {
    /// Create an invalid input error.
    #[must_use]
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    /// Create a parse error.
    #[must_use]
    pub fn parse(msg: impl Into<String>) -> Self {
        Self::Parse(msg.into())
    }
}
