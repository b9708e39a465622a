//! Error types for identifier generation.

use thiserror::Error;

/// Errors that can occur when generating an identifier.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SuuidError {
    /// The requested options are malformed (e.g. a negative length).
    #[error("invalid argument: {message}")]
    InvalidArgument { message: String },

    /// No random source could produce bytes.
    #[error("entropy source unavailable: {0}")]
    Entropy(String),
}

impl SuuidError {
    /// Creates an [`SuuidError::InvalidArgument`] with the given message.
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }

    /// Returns true if this error rejects the caller's options.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, SuuidError::InvalidArgument { .. })
    }

    /// Returns true if this error comes from the random source.
    pub fn is_entropy(&self) -> bool {
        matches!(self, SuuidError::Entropy(_))
    }
}
