//! Error types for the integration domain

use crate::queue::QueueStatus;
use thiserror::Error;

/// Result type for integration-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised by the domain model and record stores
#[derive(Error, Debug)]
pub enum Error {
    /// Queue lifecycle violation (transitions are monotonic)
    #[error("Invalid queue transition from {from} to {to}")]
    InvalidTransition {
        /// Status the item is currently in
        from: QueueStatus,
        /// Rejected target status
        to: QueueStatus,
    },

    /// Unknown queue item id
    #[error("Queue item not found: {0}")]
    QueueItemNotFound(String),

    /// Backing store failure
    #[error("Store error: {0}")]
    Store(String),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
