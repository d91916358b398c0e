//! Unit model and the unit lookup index.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::lenient::de;

/// A military unit. Employees and missions reference units by id.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Unit {
    /// Unit identifier.
    #[serde(default, deserialize_with = "de::optional_text")]
    pub id: Option<String>,
    /// Garrison city; keys the housing allowance table.
    #[serde(default, deserialize_with = "de::optional_text")]
    pub location: Option<String>,
    /// The unit lodges its members in barracks.
    #[serde(default, deserialize_with = "de::truthy")]
    pub barracks_provided: bool,
    /// The unit feeds its members.
    #[serde(default, deserialize_with = "de::truthy")]
    pub meals_provided: bool,
}

/// Units keyed by id, built once per run.
///
/// Units without an id cannot be referenced and are left out. When two
/// units share an id the later one wins.
#[derive(Debug, Clone, Default)]
pub struct UnitIndex {
    units: HashMap<String, Unit>,
}

impl UnitIndex {
    /// Builds the index from the unit list.
    pub fn new(units: impl IntoIterator<Item = Unit>) -> Self {
        let units = units
            .into_iter()
            .filter_map(|unit| unit.id.clone().map(|id| (id, unit)))
            .collect();
        Self { units }
    }

    /// Looks up a unit by reference.
    pub fn get(&self, id: Option<&str>) -> Option<&Unit> {
        id.and_then(|id| self.units.get(id))
    }

    /// Number of indexed units.
    pub fn len(&self) -> usize {
        self.units.len()
    }

    /// Returns true when no unit is indexed.
    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit(id: Option<&str>, location: &str, barracks: bool) -> Unit {
        Unit {
            id: id.map(str::to_string),
            location: Some(location.to_string()),
            barracks_provided: barracks,
            meals_provided: false,
        }
    }

    #[test]
    fn test_deserialize_unit_with_loose_flags() {
        let json = r#"{"id": "U01", "location": "Taipei", "barracks_provided": 1}"#;
        let unit: Unit = serde_json::from_str(json).unwrap();
        assert_eq!(unit.id.as_deref(), Some("U01"));
        assert!(unit.barracks_provided);
        assert!(!unit.meals_provided);
    }

    #[test]
    fn test_index_lookup() {
        let index = UnitIndex::new(vec![unit(Some("U01"), "Taipei", false)]);
        assert_eq!(index.len(), 1);
        assert_eq!(
            index.get(Some("U01")).and_then(|u| u.location.as_deref()),
            Some("Taipei")
        );
        assert!(index.get(Some("U99")).is_none());
        assert!(index.get(None).is_none());
    }

    #[test]
    fn test_index_skips_units_without_id() {
        let index = UnitIndex::new(vec![unit(None, "Keelung", true)]);
        assert!(index.is_empty());
    }

    #[test]
    fn test_later_duplicate_wins() {
        let index = UnitIndex::new(vec![
            unit(Some("U01"), "Taipei", false),
            unit(Some("U01"), "Hualien", true),
        ]);
        let found = index.get(Some("U01")).unwrap();
        assert_eq!(found.location.as_deref(), Some("Hualien"));
        assert!(found.barracks_provided);
    }
}
