//! Integration queue lifecycle
//!
//! Queue items move strictly forward: pending → processing → completed or
//! failed. Terminal states accept no further transitions, which makes
//! exchange handling safe to resume after a crash without double-completing.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// Lifecycle status of a queued integration exchange
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QueueStatus {
    /// Accepted, not yet dispatched
    Pending,
    /// Dispatch in flight
    Processing,
    /// Vendor accepted the exchange
    Completed,
    /// Exchange failed after exhausting retries
    Failed,
}

impl QueueStatus {
    /// Whether `to` is a legal next status
    pub fn can_transition(self, to: QueueStatus) -> bool {
        matches!(
            (self, to),
            (QueueStatus::Pending, QueueStatus::Processing)
                | (QueueStatus::Processing, QueueStatus::Completed)
                | (QueueStatus::Processing, QueueStatus::Failed)
        )
    }

    /// Completed or failed
    pub fn is_terminal(self) -> bool {
        matches!(self, QueueStatus::Completed | QueueStatus::Failed)
    }
}

impl fmt::Display for QueueStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QueueStatus::Pending => write!(f, "pending"),
            QueueStatus::Processing => write!(f, "processing"),
            QueueStatus::Completed => write!(f, "completed"),
            QueueStatus::Failed => write!(f, "failed"),
        }
    }
}

/// One tracked integration exchange
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IntegrationQueueItem {
    /// Queue item id
    pub id: String,
    /// Config the exchange targets
    pub config_id: String,
    /// Requested operation
    pub operation: String,
    /// Current lifecycle status
    pub status: QueueStatus,
    /// When the item was accepted
    pub created_at: DateTime<Utc>,
    /// When dispatch started
    pub started_at: Option<DateTime<Utc>>,
    /// When the item reached a terminal status
    pub completed_at: Option<DateTime<Utc>>,
    /// Canonical result for completed items
    pub result: Option<Value>,
    /// Failure detail for failed items
    pub error: Option<String>,
}

impl IntegrationQueueItem {
    /// New pending item for a submitted operation
    pub fn pending(id: &str, config_id: &str, operation: &str) -> Self {
        Self {
            id: id.to_string(),
            config_id: config_id.to_string(),
            operation: operation.to_string(),
            status: QueueStatus::Pending,
            created_at: Utc::now(),
            started_at: None,
            completed_at: None,
            result: None,
            error: None,
        }
    }
}

/// Lifecycle patch applied to a queue item
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueueUpdate {
    /// Target status
    pub status: QueueStatus,
    /// Dispatch start stamp
    pub started_at: Option<DateTime<Utc>>,
    /// Terminal stamp
    pub completed_at: Option<DateTime<Utc>>,
    /// Canonical result payload
    pub result: Option<Value>,
    /// Failure detail
    pub error: Option<String>,
}

impl QueueUpdate {
    /// Mark dispatch as started now
    pub fn processing() -> Self {
        Self {
            status: QueueStatus::Processing,
            started_at: Some(Utc::now()),
            completed_at: None,
            result: None,
            error: None,
        }
    }

    /// Mark the exchange completed with its canonical result
    pub fn completed(result: Value) -> Self {
        Self {
            status: QueueStatus::Completed,
            started_at: None,
            completed_at: Some(Utc::now()),
            result: Some(result),
            error: None,
        }
    }

    /// Mark the exchange failed
    pub fn failed(error: String) -> Self {
        Self {
            status: QueueStatus::Failed,
            started_at: None,
            completed_at: Some(Utc::now()),
            result: None,
            error: Some(error),
        }
    }
}
