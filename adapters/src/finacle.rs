//! Finacle-style adapter
//!
//! Sends the payload flat with Finacle's versioned vendor content type;
//! responses unwrap a `result` envelope when present.

use crate::auth::auth_headers;
use crate::connector::{method_for_operation, operation_url, CoreAdapter};
use crate::types::{VendorRequest, VendorResponse};
use integration_core::{IntegrationConfig, VendorType};
use serde_json::Value;

/// Content type Finacle endpoints expect
pub const FINACLE_CONTENT_TYPE: &str = "application/vnd.finacle.v1+json";

/// Finacle adapter
pub struct FinacleAdapter;

impl CoreAdapter for FinacleAdapter {
    fn vendor_type(&self) -> VendorType {
        VendorType::Finacle
    }

    fn name(&self) -> &str {
        "finacle"
    }

    fn build_request(
        &self,
        config: &IntegrationConfig,
        operation: &str,
        payload: &Value,
    ) -> VendorRequest {
        let method = method_for_operation(operation);
        let mut headers = auth_headers(&config.auth);
        headers.push(("Content-Type".to_string(), FINACLE_CONTENT_TYPE.to_string()));

        let body = method.has_body().then(|| payload.clone());

        VendorRequest {
            method,
            url: operation_url(config, operation),
            headers,
            body,
        }
    }

    fn parse_response(&self, response: &VendorResponse) -> Value {
        let value = response.body_json();
        match value.get("result") {
            Some(result) => result.clone(),
            None => value,
        }
    }
}
