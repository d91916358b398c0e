//! Tolerant coercion of loosely-typed JSON values.
//!
//! Input documents are hand-maintained, so numbers sometimes arrive as
//! strings, flags as `0`/`1`, and fields go missing entirely. Nothing here
//! ever fails: a value that cannot be read as the requested type becomes
//! `None` (or the caller's default), and the rule that depends on it is
//! skipped rather than the whole record being rejected.

use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Reads a JSON value as a decimal number.
///
/// Accepts JSON numbers and numeric strings (surrounding whitespace and
/// scientific notation allowed). Everything else yields `None`.
///
/// # Examples
///
/// ```
/// use louvois_ledger::lenient::to_decimal;
/// use rust_decimal::Decimal;
/// use serde_json::json;
///
/// assert_eq!(to_decimal(&json!(25)), Some(Decimal::from(25)));
/// assert_eq!(to_decimal(&json!(" 12.5 ")), Some(Decimal::new(125, 1)));
/// assert_eq!(to_decimal(&json!("far")), None);
/// assert_eq!(to_decimal(&json!(null)), None);
/// ```
pub fn to_decimal(value: &Value) -> Option<Decimal> {
    match value {
        Value::Number(number) => {
            if let Some(int) = number.as_i64() {
                Some(Decimal::from(int))
            } else if let Some(uint) = number.as_u64() {
                Some(Decimal::from(uint))
            } else {
                parse_decimal(&number.to_string())
            }
        }
        Value::String(text) => parse_decimal(text.trim()),
        _ => None,
    }
}

fn parse_decimal(text: &str) -> Option<Decimal> {
    if text.is_empty() {
        return None;
    }
    Decimal::from_str(text)
        .or_else(|_| Decimal::from_scientific(text))
        .ok()
}

/// Reads a JSON value with loose truthiness: `null`, `false`, zero, and
/// empty strings/collections are false; everything else is true.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(flag) => *flag,
        Value::Number(number) => number.as_f64().is_some_and(|n| n != 0.0),
        Value::String(text) => !text.is_empty(),
        Value::Array(items) => !items.is_empty(),
        Value::Object(map) => !map.is_empty(),
    }
}

/// Reads a JSON value as display text. Numbers are rendered as written;
/// other non-string values yield `None`.
pub fn to_text(value: &Value) -> Option<String> {
    match value {
        Value::String(text) => Some(text.clone()),
        Value::Number(number) => Some(number.to_string()),
        _ => None,
    }
}

/// Serde `deserialize_with` adapters built on the coercions above.
///
/// Every adapter accepts any JSON value, so pair them with `#[serde(default)]`
/// to also cover absent fields.
pub mod de {
    use super::*;

    fn raw<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Value, D::Error> {
        Ok(Option::<Value>::deserialize(deserializer)?.unwrap_or(Value::Null))
    }

    /// Numeric field; unreadable values become zero.
    pub fn decimal_or_zero<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Decimal, D::Error> {
        Ok(to_decimal(&raw(deserializer)?).unwrap_or(Decimal::ZERO))
    }

    /// Optional numeric field; unreadable values become `None`.
    pub fn optional_decimal<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<Decimal>, D::Error> {
        Ok(to_decimal(&raw(deserializer)?))
    }

    /// Flag field with loose truthiness.
    pub fn truthy<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
        Ok(is_truthy(&raw(deserializer)?))
    }

    /// Flag field that only counts a literal JSON `true`.
    pub fn strict_true<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
        Ok(matches!(raw(deserializer)?, Value::Bool(true)))
    }

    /// Optional text field; numbers are kept as their textual form.
    pub fn optional_text<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<String>, D::Error> {
        Ok(to_text(&raw(deserializer)?))
    }
}
