//! Error types for experiment views
//!
//! Every rejected constructor argument or setter value surfaces as
//! [`Error::InvalidArgument`]; callers decide whether to retry or report it.

use thiserror::Error;

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

/// Experiment view error types
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A required field was missing or a value violated its constraint
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

impl Error {
    /// Shorthand for building an [`Error::InvalidArgument`].
    pub(crate) fn invalid(message: impl Into<String>) -> Self {
        Self::InvalidArgument(message.into())
    }
}
