//! Flexcube-style adapter
//!
//! Requests wrap the payload as `{"request_id": ..., "data": ...}` with a
//! fresh correlation id per built request; the id stays stable across retry
//! attempts because the request is built once before dispatch.

use crate::auth::auth_headers;
use crate::connector::{method_for_operation, operation_url, CoreAdapter};
use crate::types::{VendorRequest, VendorResponse};
use integration_core::{IntegrationConfig, VendorType};
use serde_json::{json, Value};
use uuid::Uuid;

/// Flexcube adapter
pub struct FlexcubeAdapter;

impl CoreAdapter for FlexcubeAdapter {
    fn vendor_type(&self) -> VendorType {
        VendorType::Flexcube
    }

    fn name(&self) -> &str {
        "flexcube"
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

        let body = method.has_body().then(|| {
            json!({
                "request_id": Uuid::new_v4().to_string(),
                "data": payload,
            })
        });

        VendorRequest {
            method,
            url: operation_url(config, operation),
            headers,
            body,
        }
    }

    fn parse_response(&self, response: &VendorResponse) -> Value {
        let value = response.body_json();
        match value.get("data") {
            Some(data) => data.clone(),
            None => value,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use integration_core::{AuthConfig, RetryPolicy};

    fn test_config() -> IntegrationConfig {
        IntegrationConfig {
            id: "cfg-fcubs".to_string(),
            name: "Flexcube UBS".to_string(),
            vendor: VendorType::Flexcube,
            base_url: "https://fcubs.example.com".to_string(),
            api_version: "v1".to_string(),
            auth: AuthConfig::Basic {
                username: "svc".to_string(),
                password: "secret".to_string(),
            },
            timeout_ms: 5_000,
            retry: RetryPolicy::default(),
            active: true,
        }
    }

    #[test]
    fn test_request_id_envelope() {
        let adapter = FlexcubeAdapter;
        let request = adapter.build_request(
            &test_config(),
            "create_payment",
            &serde_json::json!({"amount": 100}),
        );

        let body = request.body.unwrap();
        assert_eq!(body["data"], serde_json::json!({"amount": 100}));
        let request_id = body["request_id"].as_str().unwrap();
        assert!(Uuid::parse_str(request_id).is_ok());
    }

    #[test]
    fn test_each_build_gets_fresh_request_id() {
        let adapter = FlexcubeAdapter;
        let config = test_config();
        let payload = serde_json::json!({"amount": 100});

        let first = adapter.build_request(&config, "create_payment", &payload);
        let second = adapter.build_request(&config, "create_payment", &payload);
        assert_ne!(
            first.body.unwrap()["request_id"],
            second.body.unwrap()["request_id"]
        );
    }

    #[test]
    fn test_response_unwraps_data() {
        let adapter = FlexcubeAdapter;

        let wrapped = VendorResponse {
            status: 200,
            body: r#"{"request_id":"r-1","data":{"txnRef":"F-9"}}"#.to_string(),
        };
        assert_eq!(adapter.parse_response(&wrapped), serde_json::json!({"txnRef": "F-9"}));

        let bare = VendorResponse {
            status: 200,
            body: r#"{"txnRef":"F-9"}"#.to_string(),
        };
        assert_eq!(adapter.parse_response(&bare), serde_json::json!({"txnRef": "F-9"}));
    }
}
