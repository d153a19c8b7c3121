//! Error types for stackview-core.

use thiserror::Error;

/// Result type alias for stackview operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Core error types for stackview operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Malformed argument: bad table size, wrong rank, mismatched shapes.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A pixel or frame index outside the valid range.
    #[error("index {index} out of range for length {len}")]
    IndexOutOfRange { index: u64, len: usize },
}

impl Error {
    /// Shorthand for building an [`Error::InvalidArgument`].
    pub(crate) fn invalid(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }
}
