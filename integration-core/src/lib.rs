//! # CoreLink Integration Core
//!
//! Vendor-neutral domain model for the core-banking adapter layer:
//!
//! - Integration configs (endpoint, auth mode, timeout, retry policy)
//! - Field mappings with invertible transformation rules
//! - Integration queue lifecycle (pending → processing → completed/failed)
//! - Append-only audit records
//! - The [`IntegrationStore`] repository seam plus an in-memory implementation
//!
//! ## Architecture
//!
//! ```text
//! ┌───────────────┐     ┌──────────────────┐     ┌───────────────┐
//! │ Integration   │────▶│ IntegrationStore │◀────│ Queue Items & │
//! │ Configs       │     │ (trait seam)     │     │ Audit Records │
//! └───────────────┘     └──────────────────┘     └───────────────┘
//! ```
//!
//! ## Safety
//!
//! - `#![forbid(unsafe_code)]` - no unsafe code allowed
//! - Queue transitions are monotonic and validated at the store boundary
//! - Config and mapping blobs are tagged unions, rejected at load time when malformed

#![forbid(unsafe_code)]
#![warn(
    missing_docs,
    rust_2018_idioms,
    unused_qualifications
)]

pub mod audit;
pub mod error;
pub mod mapping;
pub mod queue;
pub mod store;
pub mod types;

pub use audit::AuditRecord;
pub use error::{Error, Result};
pub use mapping::{CaseMode, FieldMapping, MappingDirection, TransformRule};
pub use queue::{IntegrationQueueItem, QueueStatus, QueueUpdate};
pub use store::{IntegrationStore, MemoryStore};
pub use types::{
    AuthConfig, IntegrationConfig, IntegrationRequest, IntegrationResponse, RetryPolicy,
    VendorType,
};

/// Default per-attempt request timeout (milliseconds)
pub const DEFAULT_TIMEOUT_MS: u64 = 30_000;

/// Default number of retries after the first attempt
pub const DEFAULT_MAX_RETRIES: u32 = 3;

/// Default base delay before the first retry (milliseconds)
pub const DEFAULT_BASE_BACKOFF_MS: u64 = 250;

/// Default header name for api-key authentication
pub const DEFAULT_API_KEY_HEADER: &str = "X-API-Key";
