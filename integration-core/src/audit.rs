//! Append-only audit trail for adapter invocations

use crate::types::VendorType;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One adapter invocation, written exactly once per dispatched exchange
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditRecord {
    /// Record id
    pub id: Uuid,
    /// Requested operation
    pub operation: String,
    /// Config the exchange ran against
    pub config_id: String,
    /// Vendor protocol family
    pub vendor: VendorType,
    /// Whether the vendor accepted the exchange
    pub success: bool,
    /// Final HTTP status, when a response was received
    pub status_code: Option<u16>,
    /// Write timestamp
    pub recorded_at: DateTime<Utc>,
}

impl AuditRecord {
    /// New record stamped now
    pub fn new(
        operation: &str,
        config_id: &str,
        vendor: VendorType,
        success: bool,
        status_code: Option<u16>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            operation: operation.to_string(),
            config_id: config_id.to_string(),
            vendor,
            success,
            status_code,
            recorded_at: Utc::now(),
        }
    }
}
