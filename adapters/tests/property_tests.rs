//! Property-based tests for mapping and transform invariants
//!
//! These tests verify round-trip properties that must hold for all inputs,
//! not just specific test cases.

use adapters::mapping::MappingEngine;
use adapters::transform::{apply_inbound, apply_outbound};
use integration_core::{FieldMapping, MappingDirection, TransformRule};
use proptest::prelude::*;
use rust_decimal::Decimal;
use serde_json::{json, Value};
use std::collections::HashMap;

// ============================================================================
// Transform Invariants
// ============================================================================

proptest! {
    /// Property: scaling out and back in recovers the original amount
    #[test]
    fn numeric_scale_round_trips(cents in 0u64..100_000_000u64) {
        let rule = TransformRule::NumericScale { factor: Decimal::from(100) };
        let amount = cents as f64 / 100.0;
        let original = json!(amount);

        let vendor = apply_outbound(&rule, &original);
        let recovered = apply_inbound(&rule, &vendor);

        prop_assert_eq!(recovered.as_f64().unwrap(), amount);
    }

    /// Property: enum lookup is symmetric for bijective tables
    #[test]
    fn enum_lookup_symmetric(
        pairs in prop::collection::hash_map("[a-z]{3,8}", "[A-Z]{3,8}", 1..5),
        index in any::<prop::sample::Index>(),
    ) {
        // Reverse lookup needs distinct vendor codes
        let distinct: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (v.clone(), k.clone()))
            .collect::<HashMap<_, _>>()
            .into_iter()
            .map(|(v, k)| (k, v))
            .collect();
        let keys: Vec<&String> = distinct.keys().collect();
        let chosen = keys[index.index(keys.len())].clone();

        let rule = TransformRule::EnumLookup { values: distinct };
        let vendor = apply_outbound(&rule, &json!(chosen.clone()));
        let recovered = apply_inbound(&rule, &vendor);

        prop_assert_eq!(recovered, json!(chosen));
    }

    /// Property: padding is idempotent
    #[test]
    fn string_pad_idempotent(
        text in "[a-z0-9]{0,12}",
        length in 0usize..16,
    ) {
        let rule = TransformRule::StringPad { length, fill: '0' };

        let once = apply_outbound(&rule, &json!(text));
        let twice = apply_outbound(&rule, &once);

        prop_assert_eq!(&once, &twice);
        let padded = once.as_str().map(str::to_string);
        prop_assert!(padded.is_some());
        let padded = padded.unwrap();
        prop_assert_eq!(padded.chars().count(), length.max(text.chars().count()));
        prop_assert!(padded.ends_with(text.as_str()));
    }

    /// Property: dates survive a round trip through any unambiguous pattern
    #[test]
    fn date_format_round_trips(
        days in 0i64..20_000,
        pattern in prop::sample::select(vec!["%d/%m/%Y", "%Y%m%d", "%d-%b-%Y"]),
    ) {
        let date = chrono::NaiveDate::from_ymd_opt(1990, 1, 1).unwrap()
            + chrono::Duration::days(days);
        let rule = TransformRule::DateFormat { format: pattern.to_string() };
        let original = json!(date.format("%Y-%m-%d").to_string());

        let vendor = apply_outbound(&rule, &original);
        let recovered = apply_inbound(&rule, &vendor);

        prop_assert_eq!(recovered, original);
    }
}

// ============================================================================
// Mapping Engine Invariants
// ============================================================================

proptest! {
    /// Property: a bidirectional rename-only mapping set is lossless
    #[test]
    fn rename_mapping_round_trips(
        fields in prop::collection::hash_map("[a-z]{3,10}", "[a-zA-Z0-9 ]{0,12}", 1..6),
    ) {
        let mappings: Vec<FieldMapping> = fields
            .keys()
            .map(|name| FieldMapping {
                config_id: "cfg-prop".to_string(),
                canonical_field: name.clone(),
                vendor_field: name.to_uppercase(),
                transform: TransformRule::None,
                direction: MappingDirection::Bidirectional,
                required: false,
                default_value: None,
            })
            .collect();
        let engine = MappingEngine::new(mappings);

        let canonical = Value::Object(
            fields
                .iter()
                .map(|(k, v)| (k.clone(), json!(v)))
                .collect(),
        );

        let vendor = engine.to_vendor(&canonical);
        let recovered = engine.to_canonical(&vendor);

        prop_assert_eq!(recovered, canonical);
    }

    /// Property: nested vendor paths recover flat canonical records
    #[test]
    fn nested_path_round_trips(
        amount in 0u64..10_000_000u64,
        currency in "[A-Z]{3}",
    ) {
        let engine = MappingEngine::new(vec![
            FieldMapping {
                config_id: "cfg-prop".to_string(),
                canonical_field: "amount".to_string(),
                vendor_field: "data.attributes.amount".to_string(),
                transform: TransformRule::None,
                direction: MappingDirection::Bidirectional,
                required: true,
                default_value: None,
            },
            FieldMapping {
                config_id: "cfg-prop".to_string(),
                canonical_field: "currency".to_string(),
                vendor_field: "data.attributes.currency".to_string(),
                transform: TransformRule::None,
                direction: MappingDirection::Bidirectional,
                required: true,
                default_value: None,
            },
        ]);

        let canonical = json!({"amount": amount, "currency": currency});
        let vendor = engine.to_vendor(&canonical);

        prop_assert_eq!(
            adapters::mapping::get_path(&vendor, "data.attributes.amount"),
            Some(&json!(amount))
        );
        prop_assert_eq!(engine.to_canonical(&vendor), canonical);
    }
}
