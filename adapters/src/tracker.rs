//! Queue lifecycle tracking
//!
//! Thin layer over the record store that builds lifecycle patches and logs
//! status movement. Transition legality is enforced by the store, so a
//! resumed exchange that already reached a terminal status is refused
//! rather than double-completed.

use crate::error::Result;
use integration_core::{IntegrationStore, QueueUpdate};
use serde_json::Value;
use std::sync::Arc;
use tracing::info;

/// Moves queue items through pending → processing → completed/failed
pub struct QueueTracker {
    store: Arc<dyn IntegrationStore>,
}

impl QueueTracker {
    /// Tracker over a record store
    pub fn new(store: Arc<dyn IntegrationStore>) -> Self {
        Self { store }
    }

    /// Mark dispatch as started
    pub async fn mark_processing(&self, queue_id: &str) -> Result<()> {
        self.store
            .update_queue_item(queue_id, QueueUpdate::processing())
            .await?;
        info!("Queue item {} marked processing", queue_id);
        Ok(())
    }

    /// Record a successful exchange with its canonical result
    pub async fn mark_completed(&self, queue_id: &str, result: Value) -> Result<()> {
        self.store
            .update_queue_item(queue_id, QueueUpdate::completed(result))
            .await?;
        info!("Queue item {} marked completed", queue_id);
        Ok(())
    }

    /// Record a failed exchange with its error detail
    pub async fn mark_failed(&self, queue_id: &str, error: String) -> Result<()> {
        self.store
            .update_queue_item(queue_id, QueueUpdate::failed(error))
            .await?;
        info!("Queue item {} marked failed", queue_id);
        Ok(())
    }
}
