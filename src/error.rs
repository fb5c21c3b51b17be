//! Frontend Errors

use thiserror::Error;

/// Common result type for page operations
pub type AppResult<T> = Result<T, AppError>;

#[derive(Debug, Error)]
pub enum AppError {
    /// Request rejected or transport failure
    #[error("request to {url} failed: {message}")]
    Network { url: String, message: String },

    #[error("request to {url} returned status {status}")]
    Status { url: String, status: u16 },

    /// Payload did not have the expected shape
    #[error("unexpected payload from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },

    /// Countdown duration was empty, non-numeric or not positive
    #[error("Please enter a valid number of seconds")]
    InvalidDuration(String),
}

impl AppError {
    pub fn network(url: &str, err: impl std::fmt::Display) -> Self {
        AppError::Network { url: url.to_string(), message: err.to_string() }
    }

    /// Transport-level failures, including non-success statuses
    pub fn is_network(&self) -> bool {
        matches!(self, AppError::Network { .. } | AppError::Status { .. })
    }
}
