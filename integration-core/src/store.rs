//! Repository seam for configs, mappings, queue items, and audit records
//!
//! The adapter layer only ever touches persistence through
//! [`IntegrationStore`], so the in-memory implementation used in tests and
//! demos is interchangeable with a database-backed one.

use crate::audit::AuditRecord;
use crate::error::{Error, Result};
use crate::mapping::FieldMapping;
use crate::queue::{IntegrationQueueItem, QueueUpdate};
use crate::types::IntegrationConfig;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Record store the adapter layer reads and writes through
///
/// Implementations must reject non-monotonic queue transitions with
/// [`Error::InvalidTransition`] so lifecycle guarantees hold regardless of
/// the backing store.
#[async_trait]
pub trait IntegrationStore: Send + Sync {
    /// Load a config by id
    async fn get_config(&self, id: &str) -> Result<Option<IntegrationConfig>>;

    /// All field mappings scoped to a config
    async fn list_mappings(&self, config_id: &str) -> Result<Vec<FieldMapping>>;

    /// Load a queue item by id
    async fn get_queue_item(&self, id: &str) -> Result<Option<IntegrationQueueItem>>;

    /// Apply a lifecycle patch to a queue item
    async fn update_queue_item(&self, id: &str, update: QueueUpdate) -> Result<()>;

    /// Append an audit record
    async fn insert_audit(&self, record: AuditRecord) -> Result<()>;
}

/// In-memory store backed by `RwLock`-guarded maps
#[derive(Clone, Default)]
pub struct MemoryStore {
    configs: Arc<RwLock<HashMap<String, IntegrationConfig>>>,
    mappings: Arc<RwLock<HashMap<String, Vec<FieldMapping>>>>,
    queue: Arc<RwLock<HashMap<String, IntegrationQueueItem>>>,
    audits: Arc<RwLock<Vec<AuditRecord>>>,
}

impl MemoryStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a config
    pub async fn put_config(&self, config: IntegrationConfig) {
        self.configs.write().await.insert(config.id.clone(), config);
    }

    /// Append a field mapping to its config's mapping set
    pub async fn put_mapping(&self, mapping: FieldMapping) {
        self.mappings
            .write()
            .await
            .entry(mapping.config_id.clone())
            .or_default()
            .push(mapping);
    }

    /// Insert or replace a queue item
    pub async fn put_queue_item(&self, item: IntegrationQueueItem) {
        self.queue.write().await.insert(item.id.clone(), item);
    }

    /// Snapshot of the audit trail, oldest first
    pub async fn audit_log(&self) -> Vec<AuditRecord> {
        self.audits.read().await.clone()
    }
}

#[async_trait]
impl IntegrationStore for MemoryStore {
    async fn get_config(&self, id: &str) -> Result<Option<IntegrationConfig>> {
        Ok(self.configs.read().await.get(id).cloned())
    }

    async fn list_mappings(&self, config_id: &str) -> Result<Vec<FieldMapping>> {
        Ok(self
            .mappings
            .read()
            .await
            .get(config_id)
            .cloned()
            .unwrap_or_default())
    }

    async fn get_queue_item(&self, id: &str) -> Result<Option<IntegrationQueueItem>> {
        Ok(self.queue.read().await.get(id).cloned())
    }

    async fn update_queue_item(&self, id: &str, update: QueueUpdate) -> Result<()> {
        let mut queue = self.queue.write().await;
        let item = queue
            .get_mut(id)
            .ok_or_else(|| Error::QueueItemNotFound(id.to_string()))?;

        if !item.status.can_transition(update.status) {
            return Err(Error::InvalidTransition {
                from: item.status,
                to: update.status,
            });
        }

        item.status = update.status;
        if let Some(started_at) = update.started_at {
            item.started_at = Some(started_at);
        }
        if let Some(completed_at) = update.completed_at {
            item.completed_at = Some(completed_at);
        }
        if let Some(result) = update.result {
            item.result = Some(result);
        }
        if let Some(error) = update.error {
            item.error = Some(error);
        }
        Ok(())
    }

    async fn insert_audit(&self, record: AuditRecord) -> Result<()> {
        self.audits.write().await.push(record);
        Ok(())
    }
}
