//! Bidirectional field mapping engine
//!
//! The engine walks the mapping rows for a config and rebuilds the payload
//! on the other side of the canonical/vendor boundary. Both field names
//! support `.`-separated paths, so flat canonical records can map into
//! nested vendor envelopes and back.

use crate::metrics::MAPPING_REQUIRED_SKIPPED;
use crate::transform;
use integration_core::FieldMapping;
use serde_json::{Map, Value};
use tracing::warn;

/// Mapping engine for one config's mapping set
pub struct MappingEngine {
    mappings: Vec<FieldMapping>,
}

impl MappingEngine {
    /// Engine over the given mapping rows
    pub fn new(mappings: Vec<FieldMapping>) -> Self {
        Self { mappings }
    }

    /// Number of mapping rows loaded
    pub fn len(&self) -> usize {
        self.mappings.len()
    }

    /// Whether the engine has no mapping rows
    pub fn is_empty(&self) -> bool {
        self.mappings.is_empty()
    }

    /// Canonical record → vendor-shaped payload
    ///
    /// An empty mapping set passes the record through unchanged; the
    /// adapter still applies its envelope.
    pub fn to_vendor(&self, canonical: &Value) -> Value {
        if self.mappings.is_empty() {
            return canonical.clone();
        }
        let mut vendor = Value::Object(Map::new());
        for mapping in &self.mappings {
            if !mapping.direction.includes_outbound() {
                continue;
            }
            let source = get_path(canonical, &mapping.canonical_field)
                .cloned()
                .or_else(|| mapping.default_value.clone());
            match source {
                Some(value) => {
                    let transformed = transform::apply_outbound(&mapping.transform, &value);
                    set_path(&mut vendor, &mapping.vendor_field, transformed);
                }
                None => self.note_missing(mapping, &mapping.canonical_field),
            }
        }
        vendor
    }

    /// Vendor response body → canonical record
    ///
    /// An empty mapping set passes the body through unchanged.
    pub fn to_canonical(&self, vendor: &Value) -> Value {
        if self.mappings.is_empty() {
            return vendor.clone();
        }
        let mut canonical = Value::Object(Map::new());
        for mapping in &self.mappings {
            if !mapping.direction.includes_inbound() {
                continue;
            }
            let source = get_path(vendor, &mapping.vendor_field)
                .cloned()
                .or_else(|| mapping.default_value.clone());
            match source {
                Some(value) => {
                    let transformed = transform::apply_inbound(&mapping.transform, &value);
                    set_path(&mut canonical, &mapping.canonical_field, transformed);
                }
                None => self.note_missing(mapping, &mapping.vendor_field),
            }
        }
        canonical
    }

    fn note_missing(&self, mapping: &FieldMapping, field: &str) {
        if mapping.required {
            warn!(
                "Required mapping {} -> {} skipped: no value and no default",
                mapping.canonical_field, mapping.vendor_field
            );
            MAPPING_REQUIRED_SKIPPED
                .with_label_values(&[&mapping.config_id, field])
                .inc();
        }
    }
}

/// Value at a `.`-separated path, if present
pub fn get_path<'a>(source: &'a Value, path: &str) -> Option<&'a Value> {
    let mut current = source;
    for segment in path.split('.') {
        current = current.as_object()?.get(segment)?;
    }
    Some(current)
}

/// Write a value at a `.`-separated path, creating intermediate objects
///
/// Non-object intermediates are replaced, so a later mapping can deepen a
/// path an earlier mapping wrote a scalar to.
pub fn set_path(target: &mut Value, path: &str, new_value: Value) {
    if !target.is_object() {
        *target = Value::Object(Map::new());
    }
    let Some(obj) = target.as_object_mut() else {
        return;
    };
    match path.split_once('.') {
        None => {
            obj.insert(path.to_string(), new_value);
        }
        Some((head, rest)) => {
            let child = obj
                .entry(head.to_string())
                .or_insert_with(|| Value::Object(Map::new()));
            set_path(child, rest, new_value);
        }
    }
}
