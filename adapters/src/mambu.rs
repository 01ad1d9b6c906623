//! Mambu-style adapter
//!
//! Speaks the JSON:API shape: requests nest the payload under
//! `data.attributes`, responses unwrap the same nesting with progressively
//! looser fallbacks for replies that flatten it.

use crate::auth::auth_headers;
use crate::connector::{method_for_operation, operation_url, CoreAdapter};
use crate::mapping::get_path;
use crate::types::{VendorRequest, VendorResponse};
use integration_core::{IntegrationConfig, VendorType};
use serde_json::{json, Value};

/// Mambu adapter
pub struct MambuAdapter;

impl CoreAdapter for MambuAdapter {
    fn vendor_type(&self) -> VendorType {
        VendorType::Mambu
    }

    fn name(&self) -> &str {
        "mambu"
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

        let body = method
            .has_body()
            .then(|| json!({ "data": { "attributes": payload } }));

        VendorRequest {
            method,
            url: operation_url(config, operation),
            headers,
            body,
        }
    }

    fn parse_response(&self, response: &VendorResponse) -> Value {
        let value = response.body_json();
        if let Some(attributes) = get_path(&value, "data.attributes") {
            return attributes.clone();
        }
        match value.get("data") {
            Some(data) => data.clone(),
            None => value,
        }
    }
}
