//! Field mapping rows and transformation rule definitions
//!
//! A [`FieldMapping`] pairs one canonical field with one vendor field for a
//! given config. The attached [`TransformRule`] describes how the value is
//! rewritten on the way out; the mapping engine applies the inverse on the
//! way back in. Rules without a meaningful inverse (padding, case folding)
//! pass values through unchanged inbound.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

/// Directions a mapping participates in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MappingDirection {
    /// Canonical → vendor only
    Outbound,
    /// Vendor → canonical only
    Inbound,
    /// Both directions
    Bidirectional,
}

impl MappingDirection {
    /// Applies when building the vendor payload
    pub fn includes_outbound(self) -> bool {
        matches!(self, MappingDirection::Outbound | MappingDirection::Bidirectional)
    }

    /// Applies when mapping a vendor response back
    pub fn includes_inbound(self) -> bool {
        matches!(self, MappingDirection::Inbound | MappingDirection::Bidirectional)
    }
}

impl Default for MappingDirection {
    fn default() -> Self {
        MappingDirection::Bidirectional
    }
}

/// Case folding mode for [`TransformRule::CaseFold`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CaseMode {
    /// Uppercase outbound
    Upper,
    /// Lowercase outbound
    Lower,
}

/// Value transformation applied when a field crosses the canonical/vendor boundary
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TransformRule {
    /// Render canonical ISO 8601 dates with a vendor pattern
    DateFormat {
        /// chrono strftime pattern, e.g. "%Y%m%d"
        format: String,
    },
    /// Multiply outbound and divide inbound by a fixed factor
    NumericScale {
        /// Scale factor, e.g. 100 for major-to-minor currency units
        factor: Decimal,
    },
    /// Translate canonical enumerants to vendor codes
    EnumLookup {
        /// Canonical value → vendor code
        values: HashMap<String, String>,
    },
    /// Left-pad the stringified value to a fixed width; no inbound inverse
    StringPad {
        /// Target width
        length: usize,
        /// Fill character
        fill: char,
    },
    /// Fold string case outbound; no inbound inverse
    CaseFold {
        /// Folding mode
        mode: CaseMode,
    },
    /// Pass the value through unchanged
    None,
}

impl Default for TransformRule {
    fn default() -> Self {
        TransformRule::None
    }
}

/// One canonical ↔ vendor field pairing, scoped to a config
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldMapping {
    /// Owning [`crate::IntegrationConfig`] id
    pub config_id: String,
    /// Canonical field name; `.`-separated for nested records
    pub canonical_field: String,
    /// Vendor field path; `.`-separated for nested payloads
    pub vendor_field: String,
    /// Value transformation
    #[serde(default)]
    pub transform: TransformRule,
    /// Directions the mapping participates in
    #[serde(default)]
    pub direction: MappingDirection,
    /// Required mappings are logged and counted when no value can be produced
    #[serde(default)]
    pub required: bool,
    /// Fallback used when the source record omits the field
    #[serde(default)]
    pub default_value: Option<Value>,
}
