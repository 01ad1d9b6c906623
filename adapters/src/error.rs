//! Error types for the adapter layer

use thiserror::Error;

/// Result type for adapter operations
pub type Result<T> = std::result::Result<T, Error>;

/// Adapter errors
#[derive(Error, Debug)]
pub enum Error {
    /// Connection error
    #[error("Connection error: {0}")]
    Connection(String),

    /// Config missing or inactive
    #[error("Integration config not found: {0}")]
    ConfigNotFound(String),

    /// Vendor rejected the exchange
    #[error("Vendor API error {status_code}: {message}")]
    VendorApi {
        /// HTTP status code
        status_code: u16,
        /// Error message
        message: String,
    },

    /// Timeout
    #[error("Timeout after {ms}ms: {operation}")]
    Timeout {
        /// Timeout duration (milliseconds)
        ms: u64,
        /// Operation
        operation: String,
    },

    /// Retry exhausted
    #[error("Retry exhausted after {attempts} attempts: {last_error}")]
    RetryExhausted {
        /// Attempts made
        attempts: u32,
        /// Last error
        last_error: String,
    },

    /// HTTP client error
    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Domain error bubbled up from the record store
    #[error(transparent)]
    Core(#[from] integration_core::Error),
}

impl Error {
    /// HTTP status an API layer should map this error to
    pub fn status_code(&self) -> u16 {
        match self {
            Error::ConfigNotFound(_) => 404,
            Error::Core(integration_core::Error::QueueItemNotFound(_)) => 404,
            Error::Core(integration_core::Error::InvalidTransition { .. }) => 409,
            Error::Timeout { .. } => 504,
            Error::RetryExhausted { .. } | Error::Connection(_) => 502,
            Error::VendorApi { status_code, .. } => *status_code,
            _ => 500,
        }
    }
}
