//! Temenos-style adapter, the baseline dialect
//!
//! Requests wrap the payload in a `body` envelope; responses unwrap the same
//! envelope. Configs with an unregistered or custom vendor fall back to this
//! dialect.

use crate::auth::auth_headers;
use crate::connector::{method_for_operation, operation_url, CoreAdapter};
use crate::types::{VendorRequest, VendorResponse};
use integration_core::{IntegrationConfig, VendorType};
use serde_json::{json, Value};

/// Temenos adapter
pub struct TemenosAdapter;

impl CoreAdapter for TemenosAdapter {
    fn vendor_type(&self) -> VendorType {
        VendorType::Temenos
    }

    fn name(&self) -> &str {
        "temenos"
    }

    fn build_request(
        &self,
        config: &IntegrationConfig,
        operation: &str,
        payload: &Value,
    ) -> VendorRequest {
        let method = method_for_operation(operation);
        let mut headers = auth_headers(&config.auth);
        headers.push(("Content-Type".to_string(), "application/json".to_string()));

        let body = method.has_body().then(|| json!({ "body": payload }));

        VendorRequest {
            method,
            url: operation_url(config, operation),
            headers,
            body,
        }
    }

    fn parse_response(&self, response: &VendorResponse) -> Value {
        let value = response.body_json();
        match value.get("body") {
            Some(inner) => inner.clone(),
            None => value,
        }
    }
}
