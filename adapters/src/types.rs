//! Shared types for the adapter layer

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// HTTP verbs the adapter layer issues
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HttpMethod {
    /// GET
    Get,
    /// POST
    Post,
    /// PATCH
    Patch,
    /// DELETE
    Delete,
}

impl HttpMethod {
    /// Whether requests with this verb carry a payload
    pub fn has_body(self) -> bool {
        matches!(self, HttpMethod::Post | HttpMethod::Patch)
    }
}

impl std::fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HttpMethod::Get => write!(f, "GET"),
            HttpMethod::Post => write!(f, "POST"),
            HttpMethod::Patch => write!(f, "PATCH"),
            HttpMethod::Delete => write!(f, "DELETE"),
        }
    }
}

/// One fully built HTTP request to a vendor core
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VendorRequest {
    /// HTTP verb
    pub method: HttpMethod,
    /// Full request URL
    pub url: String,
    /// Headers, including auth and content type
    pub headers: Vec<(String, String)>,
    /// Enveloped body for verbs that carry one
    pub body: Option<Value>,
}

impl VendorRequest {
    /// First value of a header, case-insensitive
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

/// Raw reply from a vendor core
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VendorResponse {
    /// HTTP status code
    pub status: u16,
    /// Raw response body
    pub body: String,
}

impl VendorResponse {
    /// Whether the vendor accepted the exchange (2xx)
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Body parsed as JSON; non-JSON payloads are wrapped under "raw"
    pub fn body_json(&self) -> Value {
        serde_json::from_str(&self.body)
            .unwrap_or_else(|_| serde_json::json!({ "raw": self.body }))
    }
}
