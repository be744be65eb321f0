//! # Raw Input Parsing
//!
//! Form fields arrive as text typed by a user or as JSON numbers. Every
//! numeric field resolves to an `f64` with a per-field default:
//!
//! `parse(value) = is_finite(to_float(value)) ? to_float(value) : default`
//!
//! A literal `0` is a valid value and is kept. Only missing, blank,
//! unparseable or non-finite values fall back to the default.
//!
//! ## Example
//!
//! ```rust
//! use coldload_core::input::{parse_field, FieldValue};
//!
//! let typed = Some(FieldValue::Text(" 7.5 ".to_string()));
//! assert_eq!(parse_field(&typed, "length", 3.05), 7.5);
//!
//! let blank = Some(FieldValue::Text(String::new()));
//! assert_eq!(parse_field(&blank, "length", 3.05), 3.05);
//!
//! let zero = Some(FieldValue::Number(0.0));
//! assert_eq!(parse_field(&zero, "steam_kw", 1.0), 0.0);
//! ```

use serde::{Deserialize, Serialize};
use tracing::debug;

/// A raw form value: either a JSON number or the text the user typed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Number(f64),
    Text(String),
}

impl FieldValue {
    /// Interpret the value as a finite number, if it is one
    pub fn as_finite(&self) -> Option<f64> {
        let value = match self {
            FieldValue::Number(n) => *n,
            FieldValue::Text(s) => s.trim().parse::<f64>().ok()?,
        };
        value.is_finite().then_some(value)
    }

    /// Interpret the value as a non-blank key (product name, insulation type, ...)
    pub fn as_key(&self) -> Option<String> {
        match self {
            FieldValue::Number(n) if n.is_finite() => Some(n.to_string()),
            FieldValue::Number(_) => None,
            FieldValue::Text(s) => {
                let trimmed = s.trim();
                (!trimmed.is_empty()).then(|| trimmed.to_string())
            }
        }
    }
}

impl From<f64> for FieldValue {
    fn from(value: f64) -> Self {
        FieldValue::Number(value)
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::Text(value)
    }
}

/// Resolve a numeric field, substituting `default` when it is absent or not a finite number
pub fn parse_field(value: &Option<FieldValue>, field: &str, default: f64) -> f64 {
    match value.as_ref().and_then(FieldValue::as_finite) {
        Some(v) => v,
        None => {
            debug!(field, default, raw = ?value, "using default for numeric field");
            default
        }
    }
}

/// Resolve a key field, substituting `default` when it is absent or blank
pub fn parse_key(value: &Option<FieldValue>, field: &str, default: &str) -> String {
    match value.as_ref().and_then(FieldValue::as_key) {
        Some(key) => key,
        None => {
            debug!(field, default, "using default for key field");
            default.to_string()
        }
    }
}

/// Resolve an optional override: `Some` only when the field holds a finite number
pub fn parse_override(value: &Option<FieldValue>) -> Option<f64> {
    value.as_ref().and_then(FieldValue::as_finite)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_number_and_text_parse() {
        assert_eq!(parse_field(&Some(FieldValue::Number(4.5)), "width", 1.0), 4.5);
        assert_eq!(parse_field(&Some("-35".into()), "internal_temp", 2.0), -35.0);
        assert_eq!(parse_field(&Some("1e3".into()), "mass", 1.0), 1000.0);
    }

    #[test]
    fn test_missing_and_blank_use_default() {
        assert_eq!(parse_field(&None, "height", 3.0), 3.0);
        assert_eq!(parse_field(&Some("   ".into()), "height", 3.0), 3.0);
        assert_eq!(parse_field(&Some("abc".into()), "height", 3.0), 3.0);
    }

    #[test]
    fn test_non_finite_uses_default() {
        assert_eq!(parse_field(&Some("inf".into()), "height", 3.0), 3.0);
        assert_eq!(parse_field(&Some("NaN".into()), "height", 3.0), 3.0);
        assert_eq!(parse_field(&Some(FieldValue::Number(f64::NAN)), "height", 3.0), 3.0);
    }

    #[test]
    fn test_zero_is_kept() {
        assert_eq!(parse_field(&Some("0".into()), "people", 2.0), 0.0);
        assert_eq!(parse_field(&Some(FieldValue::Number(0.0)), "people", 2.0), 0.0);
    }

    #[test]
    fn test_key_parsing() {
        assert_eq!(parse_key(&Some(" PIR ".into()), "insulation_type", "PUF"), "PIR");
        assert_eq!(parse_key(&Some("".into()), "insulation_type", "PUF"), "PUF");
        assert_eq!(parse_key(&None, "insulation_type", "PUF"), "PUF");
    }

    #[test]
    fn test_override() {
        assert_eq!(parse_override(&Some("3.9".into())), Some(3.9));
        assert_eq!(parse_override(&Some("".into())), None);
        assert_eq!(parse_override(&None), None);
    }

    #[test]
    fn test_deserialize_untagged() {
        let values: Vec<FieldValue> = serde_json::from_str(r#"[12, "12.5", ""]"#).unwrap();
        assert_eq!(values[0], FieldValue::Number(12.0));
        assert_eq!(values[1], FieldValue::Text("12.5".to_string()));
        assert_eq!(values[2].as_finite(), None);
    }
}
