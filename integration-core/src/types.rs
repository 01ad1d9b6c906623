//! Shared types for vendor integrations

use crate::{DEFAULT_API_KEY_HEADER, DEFAULT_BASE_BACKOFF_MS, DEFAULT_MAX_RETRIES, DEFAULT_TIMEOUT_MS};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::time::Duration;

/// Supported vendor protocol families
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VendorType {
    /// Temenos-style cores (`body` envelope, the baseline dialect)
    Temenos,
    /// Mambu-style cores (JSON:API `data.attributes` envelope)
    Mambu,
    /// Finacle-style cores (flat payload, vendor content type)
    Finacle,
    /// Flexcube-style cores (`request_id` + `data` envelope)
    Flexcube,
    /// Bank-specific core without a registered adapter
    Custom,
}

impl fmt::Display for VendorType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VendorType::Temenos => write!(f, "temenos"),
            VendorType::Mambu => write!(f, "mambu"),
            VendorType::Finacle => write!(f, "finacle"),
            VendorType::Flexcube => write!(f, "flexcube"),
            VendorType::Custom => write!(f, "custom"),
        }
    }
}

/// Authentication settings for a vendor endpoint, tagged by mode
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum AuthConfig {
    /// HTTP Basic authentication
    Basic {
        /// Account username
        username: String,
        /// Account password
        password: String,
    },
    /// Static API key carried in a configurable header
    ApiKey {
        /// The key value
        key: String,
        /// Header the key is sent in
        #[serde(default = "default_api_key_header")]
        header: String,
    },
    /// OAuth2 bearer token, provisioned out of band
    Oauth2 {
        /// Bearer token value
        access_token: String,
    },
}

fn default_api_key_header() -> String {
    DEFAULT_API_KEY_HEADER.to_string()
}

/// Bounded exponential backoff settings for transient vendor failures
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default)]
pub struct RetryPolicy {
    /// Additional attempts allowed after the first failure
    pub max_retries: u32,
    /// Delay before the first retry (milliseconds); doubles on each retry
    pub base_backoff_ms: u64,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_retries: DEFAULT_MAX_RETRIES,
            base_backoff_ms: DEFAULT_BASE_BACKOFF_MS,
        }
    }
}

/// One configured connection to an external core banking system
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IntegrationConfig {
    /// Config identifier
    pub id: String,
    /// Human-readable connection name
    pub name: String,
    /// Vendor protocol family
    pub vendor: VendorType,
    /// Base endpoint URL
    pub base_url: String,
    /// API version path segment, e.g. "v1"
    pub api_version: String,
    /// Authentication settings
    pub auth: AuthConfig,
    /// Per-attempt request timeout (milliseconds)
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
    /// Retry policy for transient failures
    #[serde(default)]
    pub retry: RetryPolicy,
    /// Inactive configs are rejected as if absent
    pub active: bool,
}

impl IntegrationConfig {
    /// Per-attempt timeout as a [`Duration`]
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}

fn default_timeout_ms() -> u64 {
    DEFAULT_TIMEOUT_MS
}

/// One integration exchange as submitted by the platform
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IntegrationRequest {
    /// Operation name, e.g. "create_payment" or "get_account_balance"
    pub operation: String,
    /// Target [`IntegrationConfig`] id
    pub config_id: String,
    /// Canonical, vendor-agnostic record
    pub payload: Value,
    /// Queue item to move through its lifecycle, when one was pre-created
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub queue_id: Option<String>,
}

/// Outcome of one integration exchange
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IntegrationResponse {
    /// Whether the vendor accepted the exchange (2xx)
    pub success: bool,
    /// Canonical record mapped back from the vendor response
    pub data: Value,
    /// Vendor-shaped response body before inbound mapping
    pub raw_response: Value,
    /// Final HTTP status; absent when no response was ever received
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_code: Option<u16>,
    /// Failure detail for unsuccessful exchanges
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}
