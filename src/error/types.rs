use thiserror::Error;

use crate::logging::LoggingError;

/// Unified result type for the weft crate.
pub type Result<T> = std::result::Result<T, StyleError>;

/// Errors surfaced around the style engine. Compilation and overlay solving
/// are total and never produce these; only lookups and I/O do.
#[derive(Debug, Error)]
pub enum StyleError {
    #[error("class `{0}` not registered")]
    ClassNotFound(String),
    #[error("logging failure: {0}")]
    Logging(#[from] LoggingError),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
