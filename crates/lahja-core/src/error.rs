//! Error types for Lahja.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    /// Caller supplied a value outside the accepted domain (e.g. an unknown language).
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Internal data broke an invariant the scoring pipeline relies on.
    #[error("Invariant violation: {0}")]
    InvariantViolation(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Remote classifier error: {0}")]
    Remote(String),

    #[error("HTTP error: {0}")]
    Http(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
