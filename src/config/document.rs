//! Raw lookup-table document.
//!
//! The lookup-table document is a two-level JSON object: rule domains
//! (`"probation"`, `"hazard"`, ...) holding named parameters, plus a handful
//! of top-level scalars and tables. [`TableDocument`] answers
//! `get(domain, key, default)` without ever failing; the typed views in
//! [`super::types`] are built on top of it.

use std::collections::HashMap;

use rust_decimal::Decimal;
use serde_json::{Map, Value};
use tracing::warn;

use crate::lenient;

/// The parsed lookup-table document.
///
/// # Example
///
/// ```
/// use louvois_ledger::config::TableDocument;
/// use rust_decimal::Decimal;
/// use serde_json::json;
///
/// let doc = TableDocument::new(json!({"probation": {"probation_months": 3}}));
/// assert_eq!(doc.get("probation", "probation_months", Decimal::from(6)), Decimal::from(3));
/// assert_eq!(doc.get("probation", "missing", Decimal::from(6)), Decimal::from(6));
/// assert_eq!(doc.get("absent_domain", "x", Decimal::ONE), Decimal::ONE);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TableDocument {
    root: Map<String, Value>,
}

impl TableDocument {
    /// Wraps a parsed document. Anything other than a JSON object is
    /// treated as an empty document.
    pub fn new(value: Value) -> Self {
        match value {
            Value::Object(root) => Self { root },
            Value::Null => Self::default(),
            other => {
                warn!(
                    kind = json_kind(&other),
                    "lookup tables are not an object; using defaults"
                );
                Self::default()
            }
        }
    }

    fn entry(&self, domain: &str, key: &str) -> Option<&Value> {
        self.root.get(domain)?.as_object()?.get(key)
    }

    /// Returns the numeric parameter `key` of `domain`, or `default` when the
    /// domain or key is missing or the value is not numeric.
    pub fn get(&self, domain: &str, key: &str, default: Decimal) -> Decimal {
        self.get_opt(domain, key).unwrap_or(default)
    }

    /// Returns the numeric parameter `key` of `domain`, if configured.
    pub fn get_opt(&self, domain: &str, key: &str) -> Option<Decimal> {
        let value = self.entry(domain, key)?;
        let number = lenient::to_decimal(value);
        if number.is_none() && !value.is_null() {
            warn!(domain, key, "non-numeric table value replaced by default");
        }
        number
    }

    /// Returns the text parameter `key` of `domain`, or `default`.
    pub fn get_text(&self, domain: &str, key: &str, default: &str) -> String {
        self.entry(domain, key)
            .and_then(lenient::to_text)
            .unwrap_or_else(|| default.to_string())
    }

    /// Returns a top-level numeric scalar, if configured.
    pub fn scalar(&self, key: &str) -> Option<Decimal> {
        let value = self.root.get(key)?;
        let number = lenient::to_decimal(value);
        if number.is_none() && !value.is_null() {
            warn!(key, "non-numeric table value ignored");
        }
        number
    }

    /// Returns a flat `name -> amount` table. Non-numeric entries are dropped.
    pub fn amount_table(&self, domain: &str) -> HashMap<String, Decimal> {
        self.root
            .get(domain)
            .map(amounts_of)
            .unwrap_or_default()
    }

    /// Returns a two-level `outer -> inner -> amount` table.
    pub fn nested_amount_table(&self, domain: &str) -> HashMap<String, HashMap<String, Decimal>> {
        let Some(Value::Object(outer)) = self.root.get(domain) else {
            return HashMap::new();
        };
        outer
            .iter()
            .map(|(name, inner)| (name.clone(), amounts_of(inner)))
            .collect()
    }

    /// Returns a top-level list, or an empty slice.
    pub fn list(&self, key: &str) -> &[Value] {
        match self.root.get(key) {
            Some(Value::Array(items)) => items,
            _ => &[],
        }
    }
}

fn amounts_of(value: &Value) -> HashMap<String, Decimal> {
    let Value::Object(map) = value else {
        return HashMap::new();
    };
    map.iter()
        .filter_map(|(name, amount)| lenient::to_decimal(amount).map(|a| (name.clone(), a)))
        .collect()
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
