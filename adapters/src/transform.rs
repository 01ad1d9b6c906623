//! Transformation rules applied at the canonical/vendor boundary
//!
//! Rules are pure and total: a malformed input value is coerced or passed
//! through with a debug log, never an error, so one bad field cannot sink a
//! whole exchange. [`apply_inbound`] is the inverse of [`apply_outbound`]
//! for invertible rules; padding and case folding have no inverse and pass
//! values through unchanged on the way in.

use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, NaiveDate};
use integration_core::{CaseMode, TransformRule};
use rust_decimal::Decimal;
use serde_json::Value;
use std::collections::HashMap;
use std::fmt::Write as _;
use std::str::FromStr;
use tracing::debug;

/// Canonical date pattern (ISO 8601)
pub const CANONICAL_DATE_FORMAT: &str = "%Y-%m-%d";

/// Apply a rule to a value crossing into vendor territory
pub fn apply_outbound(rule: &TransformRule, value: &Value) -> Value {
    match rule {
        TransformRule::DateFormat { format } => reformat_date(value, CANONICAL_DATE_FORMAT, format),
        TransformRule::NumericScale { factor } => scale_out(value, *factor),
        TransformRule::EnumLookup { values } => lookup_forward(values, value),
        TransformRule::StringPad { length, fill } => pad_left(value, *length, *fill),
        TransformRule::CaseFold { mode } => fold_case(value, *mode),
        TransformRule::None => value.clone(),
    }
}

/// Apply the inverse of a rule to a value coming back from a vendor
pub fn apply_inbound(rule: &TransformRule, value: &Value) -> Value {
    match rule {
        TransformRule::DateFormat { format } => reformat_date(value, format, CANONICAL_DATE_FORMAT),
        TransformRule::NumericScale { factor } => scale_in(value, *factor),
        TransformRule::EnumLookup { values } => lookup_reverse(values, value),
        // No inverse exists for lossy rules; pass values through
        TransformRule::StringPad { .. } | TransformRule::CaseFold { .. } | TransformRule::None => {
            value.clone()
        }
    }
}

fn reformat_date(value: &Value, from: &str, to: &str) -> Value {
    let text = match value {
        Value::String(s) => s,
        _ => {
            debug!("Date transform expects a string, got {:?}", value);
            return Value::String(String::new());
        }
    };

    match parse_date(text, from) {
        Some(date) => match render_date(date, to) {
            Some(rendered) => Value::String(rendered),
            None => {
                debug!("Date pattern {:?} is not renderable", to);
                Value::String(String::new())
            }
        },
        None => {
            debug!("Unparseable date {:?} for pattern {:?}", text, from);
            Value::String(String::new())
        }
    }
}

// Upstream records often carry a full RFC 3339 timestamp in date fields
fn parse_date(text: &str, pattern: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(text, pattern)
        .ok()
        .or_else(|| DateTime::parse_from_rfc3339(text).ok().map(|dt| dt.date_naive()))
}

fn render_date(date: NaiveDate, pattern: &str) -> Option<String> {
    let items: Vec<Item<'_>> = StrftimeItems::new(pattern).collect();
    let mut rendered = String::new();
    match write!(rendered, "{}", date.format_with_items(items.iter())) {
        Ok(()) => Some(rendered),
        Err(_) => None,
    }
}

fn scale_out(value: &Value, factor: Decimal) -> Value {
    let input = coerce_decimal(value);
    match input.checked_mul(factor) {
        Some(scaled) => number_value(scaled),
        None => {
            debug!("Scaling {} by {} overflows, passing through", input, factor);
            value.clone()
        }
    }
}

fn scale_in(value: &Value, factor: Decimal) -> Value {
    let input = coerce_decimal(value);
    match input.checked_div(factor) {
        Some(scaled) => number_value(scaled),
        None => {
            debug!("Cannot divide {} by scale factor {}", input, factor);
            value.clone()
        }
    }
}

fn coerce_decimal(value: &Value) -> Decimal {
    let parsed = match value {
        Value::Number(n) => parse_decimal(&n.to_string()),
        Value::String(s) => parse_decimal(s.trim()),
        _ => None,
    };
    match parsed {
        Some(d) => d,
        None => {
            debug!("Non-numeric value {:?} treated as 0", value);
            Decimal::ZERO
        }
    }
}

fn parse_decimal(text: &str) -> Option<Decimal> {
    Decimal::from_str(text)
        .or_else(|_| Decimal::from_scientific(text))
        .ok()
}

fn number_value(d: Decimal) -> Value {
    let normalized = d.normalize();
    match normalized.to_string().parse::<serde_json::Number>() {
        Ok(n) => Value::Number(n),
        Err(_) => Value::String(normalized.to_string()),
    }
}

fn lookup_forward(values: &HashMap<String, String>, value: &Value) -> Value {
    match value {
        Value::String(s) => match values.get(s) {
            Some(mapped) => Value::String(mapped.clone()),
            None => {
                debug!("No vendor code for {:?}, passing through", s);
                value.clone()
            }
        },
        _ => value.clone(),
    }
}

fn lookup_reverse(values: &HashMap<String, String>, value: &Value) -> Value {
    match value {
        Value::String(s) => match values.iter().find(|(_, vendor)| vendor.as_str() == s) {
            Some((canonical, _)) => Value::String(canonical.clone()),
            None => {
                debug!("No canonical value for vendor code {:?}, passing through", s);
                value.clone()
            }
        },
        _ => value.clone(),
    }
}

fn pad_left(value: &Value, length: usize, fill: char) -> Value {
    let text = match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        _ => return value.clone(),
    };

    let width = text.chars().count();
    if width >= length {
        return Value::String(text);
    }

    let mut padded = String::with_capacity(length);
    for _ in width..length {
        padded.push(fill);
    }
    padded.push_str(&text);
    Value::String(padded)
}

fn fold_case(value: &Value, mode: CaseMode) -> Value {
    match value {
        Value::String(s) => Value::String(match mode {
            CaseMode::Upper => s.to_uppercase(),
            CaseMode::Lower => s.to_lowercase(),
        }),
        _ => value.clone(),
    }
}
