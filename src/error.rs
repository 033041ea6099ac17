//! Error types
//!
//! A single error type is shared by every module. The history structures only
//! ever produce [`Error::InvalidArgument`]; the remaining variants wrap the
//! collaborators (database, HTTP, filesystem, background tasks).

use thiserror::Error;

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for all StreamPy operations
#[derive(Debug, Error)]
pub enum Error {
    /// Malformed input (blank string, zero capacity, bad episode)
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Stream key read before one was assigned
    #[error("Stream key for '{title}' not assigned")]
    StreamKeyNotAssigned { title: String },

    /// Content requested from a blocked region
    #[error("Content not available in your region: {country}")]
    RegionBlocked { country: String },

    /// Filesystem error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// HTTP transport error
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// CSV parse error
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// ZIP archive error
    #[error("Archive error: {0}")]
    Archive(#[from] zip::result::ZipError),

    /// Background task panicked or was cancelled
    #[error("Task failed: {0}")]
    Task(#[from] tokio::task::JoinError),

    /// Tracing subscriber could not be installed
    #[error("Logging setup failed: {0}")]
    Logging(String),
}

impl Error {
    /// Shorthand for [`Error::InvalidArgument`]
    pub fn invalid(msg: impl Into<String>) -> Self {
        Error::InvalidArgument(msg.into())
    }

    /// Check whether this is an input-validation rejection
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Error::InvalidArgument(_))
    }
}
