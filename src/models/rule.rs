//! Rule catalogue model.

use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};
use crate::lenient::de;

/// Identifier of the rule that must be present for a run to proceed.
pub const GATING_RULE_ID: &str = "R001";

/// An entry of the rule catalogue document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rule {
    /// Rule identifier, e.g. "R001".
    #[serde(default, deserialize_with = "de::optional_text")]
    pub id: Option<String>,
    /// Short name.
    #[serde(default, deserialize_with = "de::optional_text")]
    pub name: Option<String>,
    /// Free-form description.
    #[serde(default, deserialize_with = "de::optional_text")]
    pub description: Option<String>,
}

/// The loaded rule catalogue.
#[derive(Debug, Clone, Default)]
pub struct RuleSet {
    rules: Vec<Rule>,
    source: String,
}

impl RuleSet {
    /// Wraps the rules read from `source`.
    pub fn new(rules: Vec<Rule>, source: impl Into<String>) -> Self {
        Self {
            rules,
            source: source.into(),
        }
    }

    /// Returns the rule with the given id; the last entry wins on duplicates.
    pub fn find(&self, id: &str) -> Option<&Rule> {
        self.rules
            .iter()
            .rev()
            .find(|rule| rule.id.as_deref() == Some(id))
    }

    /// Returns the rule with the given id or [`EngineError::RuleNotFound`].
    pub fn require(&self, id: &str) -> EngineResult<&Rule> {
        self.find(id).ok_or_else(|| EngineError::RuleNotFound {
            rule_id: id.to_string(),
            path: self.source.clone(),
        })
    }

    /// Number of rules in the catalogue.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Returns true for an empty catalogue.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rule(id: &str, name: &str) -> Rule {
        Rule {
            id: Some(id.to_string()),
            name: Some(name.to_string()),
            description: None,
        }
    }

    #[test]
    fn test_require_present_rule() {
        let rules = RuleSet::new(vec![rule("R001", "base salary")], "rules.json");
        let found = rules.require(GATING_RULE_ID).unwrap();
        assert_eq!(found.name.as_deref(), Some("base salary"));
    }

    #[test]
    fn test_require_missing_rule_names_source() {
        let rules = RuleSet::new(vec![rule("R002", "seniority")], "data/rules.json");
        match rules.require(GATING_RULE_ID) {
            Err(EngineError::RuleNotFound { rule_id, path }) => {
                assert_eq!(rule_id, "R001");
                assert_eq!(path, "data/rules.json");
            }
            other => panic!("Expected RuleNotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_last_duplicate_wins() {
        let rules = RuleSet::new(
            vec![rule("R001", "first"), rule("R001", "second")],
            "rules.json",
        );
        assert_eq!(rules.find("R001").unwrap().name.as_deref(), Some("second"));
        assert_eq!(rules.len(), 2);
    }

    #[test]
    fn test_deserialize_rule_with_numeric_id() {
        let rule: Rule = serde_json::from_str(r#"{"id": 1, "name": "x"}"#).unwrap();
        assert_eq!(rule.id.as_deref(), Some("1"));
    }
}
