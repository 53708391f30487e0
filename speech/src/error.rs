//! Error types for speech synthesis.

use thiserror::Error;

/// Result type alias for synthesis operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for synthesis operations.
#[derive(Error, Debug)]
pub enum Error {
    /// Input text was empty after trimming.
    #[error("no text to synthesize")]
    EmptyText,

    /// The speech service rejected or aborted the request.
    #[error("speech service: {0}")]
    Service(String),

    /// IO error while persisting audio.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// The blocking synthesis task was cancelled or panicked.
    #[error("synthesis task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

impl Error {
    /// Wraps a service-side failure.
    pub(crate) fn service(err: impl std::fmt::Display) -> Self {
        Error::Service(err.to_string())
    }
}
