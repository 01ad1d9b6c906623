//! Vendor adapter interface

use crate::mapping::MappingEngine;
use crate::types::{HttpMethod, VendorRequest, VendorResponse};
use integration_core::{IntegrationConfig, VendorType};
use serde_json::Value;

/// Vendor adapter: request and response shaping for one core-banking dialect
///
/// Adapters are pure shapers. Transport, retries, and persistence live
/// elsewhere, so implementations stay synchronous and side-effect free.
pub trait CoreAdapter: Send + Sync {
    /// Protocol family this adapter speaks
    fn vendor_type(&self) -> VendorType;

    /// Adapter name for logs
    fn name(&self) -> &str;

    /// Canonical record → vendor-shaped payload
    fn transform_outbound(&self, engine: &MappingEngine, canonical: &Value) -> Value {
        engine.to_vendor(canonical)
    }

    /// Vendor body → canonical record
    fn transform_inbound(&self, engine: &MappingEngine, vendor: &Value) -> Value {
        engine.to_canonical(vendor)
    }

    /// Build the full HTTP request for an operation, envelope and headers included
    fn build_request(
        &self,
        config: &IntegrationConfig,
        operation: &str,
        payload: &Value,
    ) -> VendorRequest;

    /// Unwrap a raw vendor reply into its JSON body
    fn parse_response(&self, response: &VendorResponse) -> Value;
}

/// HTTP verb inferred from the operation name prefix
pub fn method_for_operation(operation: &str) -> HttpMethod {
    let op = operation.to_ascii_lowercase();
    if op.starts_with("get") || op.starts_with("fetch") || op.starts_with("pull") {
        HttpMethod::Get
    } else if op.starts_with("delete") || op.starts_with("remove") {
        HttpMethod::Delete
    } else if op.starts_with("update") || op.starts_with("patch") {
        HttpMethod::Patch
    } else {
        HttpMethod::Post
    }
}

/// `{base_url}/{api_version}/{operation}`, tolerant of a trailing slash on the base
pub fn operation_url(config: &IntegrationConfig, operation: &str) -> String {
    format!(
        "{}/{}/{}",
        config.base_url.trim_end_matches('/'),
        config.api_version,
        operation
    )
}
