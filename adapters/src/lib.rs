//! # CoreLink Adapters
//!
//! Core-banking connectivity layer with:
//! - Vendor adapters for the Temenos, Mambu, Finacle, and Flexcube dialects
//! - Bidirectional field mapping with invertible transformation rules
//! - HTTP dispatch with bounded exponential backoff
//! - Queue lifecycle tracking and append-only audit records
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │        Integration Orchestrator (pipeline)          │
//! └────────────┬────────────────────────────────────────┘
//!              │
//!     ┌────────┼────────────────┬────────────┐
//!     │        │                │            │
//! ┌───▼────┐ ┌─▼──────┐ ┌──────▼──┐ ┌───────▼──────┐
//! │Temenos │ │ Mambu  │ │ Finacle │ │   Flexcube   │
//! │Adapter │ │Adapter │ │ Adapter │ │   Adapter    │
//! └───┬────┘ └─┬──────┘ └──────┬──┘ └───────┬──────┘
//!     │        │                │            │
//!     └────────┼────────────────┴────────────┘
//!              │
//! ┌────────────▼─────────────────────────────────────┐
//! │   Mapping Engine + Retry Executor + Tracker      │
//! └──────────────────────────────────────────────────┘
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms, unused_qualifications)]

pub mod auth;
pub mod connector;
pub mod error;
pub mod finacle;
pub mod flexcube;
pub mod mambu;
pub mod mapping;
pub mod metrics;
pub mod orchestrator;
pub mod registry;
pub mod retry;
pub mod temenos;
pub mod tracker;
pub mod transform;
pub mod types;

pub use connector::CoreAdapter;
pub use error::{Error, Result};
pub use mapping::MappingEngine;
pub use orchestrator::IntegrationOrchestrator;
pub use registry::AdapterRegistry;
pub use retry::HttpExecutor;
pub use tracker::QueueTracker;
pub use types::*;

/// User agent sent with vendor requests
pub const USER_AGENT: &str = "corelink-connect/0.1";
