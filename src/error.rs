//! Error types for semparse.

use std::path::PathBuf;
use thiserror::Error;

/// Result type for semparse operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for semparse operations.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// A serialized model could not be read or decoded.
    #[error("Failed to load model from {}: {reason}", .path.display())]
    ModelLoad {
        /// Artifact path.
        path: PathBuf,
        /// What went wrong.
        reason: String,
    },

    /// Invalid input provided.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// The parser or supertagger failed on a sentence.
    #[error("Inference failed: {0}")]
    Inference(String),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Document-model error.
    #[error(transparent)]
    Core(#[from] semparse_core::Error),
}

impl Error {
    /// Create a model load error.
    pub fn model_load(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        Error::ModelLoad {
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Create an invalid input error.
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Error::InvalidInput(msg.into())
    }

    /// Create an inference error.
    pub fn inference(msg: impl Into<String>) -> Self {
        Error::Inference(msg.into())
    }
}
