//! Shared error types for the application

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for faultmap operations
#[derive(Debug, Error)]
pub enum Error {
    /// Structural errors in an input report: a missing nesting level or a
    /// score that is not a finite number
    #[error("Structure error: {message}")]
    Structure {
        message: String,
        path: Option<PathBuf>,
    },

    /// Reducer precondition violation: a technique reached the reducer with
    /// no collected scores. This is a contract defect in the caller, not a
    /// recoverable runtime condition.
    #[error("Technique '{technique}' has no scores to reduce")]
    EmptyScoreSet { technique: String },

    /// IO errors
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Create a structure error without file context
    pub fn structure(message: impl Into<String>) -> Self {
        Self::Structure {
            message: message.into(),
            path: None,
        }
    }

    /// Create a structure error attributed to a report file
    pub fn structure_in(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::Structure {
            message: message.into(),
            path: Some(path.into()),
        }
    }
}

/// Result type alias using our error type
pub type Result<T> = std::result::Result<T, Error>;
