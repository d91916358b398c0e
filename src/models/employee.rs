//! Employee model and related types.
//!
//! This module defines the [`Employee`] record along with the [`Rank`] and
//! [`Branch`] enums. Employee records are read tolerantly: every numeric
//! field defaults to zero and every flag to false when absent or malformed.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};

use crate::lenient::de;

/// Military rank. Base salary and housing tables are keyed by the rank name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Rank {
    /// Private.
    Private,
    /// Corporal.
    Corporal,
    /// Sergeant.
    Sergeant,
    /// Lieutenant.
    Lieutenant,
    /// Captain.
    Captain,
    /// Major.
    Major,
    /// Colonel.
    Colonel,
    /// General.
    General,
}

impl Rank {
    /// Every rank, lowest first.
    pub const ALL: [Rank; 8] = [
        Rank::Private,
        Rank::Corporal,
        Rank::Sergeant,
        Rank::Lieutenant,
        Rank::Captain,
        Rank::Major,
        Rank::Colonel,
        Rank::General,
    ];

    /// Returns the table key for this rank.
    pub fn as_str(&self) -> &'static str {
        match self {
            Rank::Private => "Private",
            Rank::Corporal => "Corporal",
            Rank::Sergeant => "Sergeant",
            Rank::Lieutenant => "Lieutenant",
            Rank::Captain => "Captain",
            Rank::Major => "Major",
            Rank::Colonel => "Colonel",
            Rank::General => "General",
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Rank {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Rank::ALL
            .into_iter()
            .find(|rank| rank.as_str() == s)
            .ok_or(())
    }
}

/// Service branch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Branch {
    /// Army.
    Army,
    /// Navy.
    Navy,
    /// Air Force.
    AirForce,
}

impl FromStr for Branch {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Army" => Ok(Branch::Army),
            "Navy" => Ok(Branch::Navy),
            "AirForce" => Ok(Branch::AirForce),
            _ => Err(()),
        }
    }
}

fn lenient_branch<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<Branch>, D::Error> {
    let text = de::optional_text(deserializer)?;
    Ok(text.and_then(|t| t.parse().ok()))
}

/// Represents one service member on the payroll.
///
/// Records are immutable input: the engine derives every ledger value from
/// them and never writes back.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    /// Identifier, e.g. "E001".
    #[serde(default, deserialize_with = "de::optional_text")]
    pub id: Option<String>,
    /// Display name.
    #[serde(default, deserialize_with = "de::optional_text")]
    pub name: Option<String>,
    /// Rank name used for salary and housing lookups.
    #[serde(default, deserialize_with = "de::optional_text")]
    pub rank: Option<String>,
    /// Service branch, if recognised.
    #[serde(default, deserialize_with = "lenient_branch")]
    pub branch: Option<Branch>,
    /// Months served; drives probation.
    #[serde(default, deserialize_with = "de::decimal_or_zero")]
    pub months_in_service: Decimal,
    /// Years counted towards seniority allowance.
    #[serde(default, deserialize_with = "de::decimal_or_zero")]
    pub seniority_years: Decimal,
    /// Promotion date (`YYYY-MM-DD`) within the current pay month.
    #[serde(default, deserialize_with = "de::optional_text")]
    pub promotion_date: Option<String>,
    /// Rank held from the promotion date onward.
    #[serde(default, deserialize_with = "de::optional_text")]
    pub new_rank: Option<String>,
    /// Days spent acting in a higher post.
    #[serde(default, deserialize_with = "de::decimal_or_zero")]
    pub acting_days: Decimal,
    /// Legacy per-employee housing allowance.
    #[serde(default, deserialize_with = "de::decimal_or_zero")]
    pub housing_allowance: Decimal,
    /// Legacy per-employee barracks subsidy.
    #[serde(default, deserialize_with = "de::decimal_or_zero")]
    pub barracks_subsidy: Decimal,
    /// Flat commute allowance used when no distance band applies.
    #[serde(default, deserialize_with = "de::decimal_or_zero")]
    pub commute_allowance: Decimal,
    /// Commute distance in kilometres; `None` when absent or unparseable.
    #[serde(default, deserialize_with = "de::optional_decimal")]
    pub commute_km: Option<Decimal>,
    /// Official vehicle allowance, competing with the commute allowance.
    #[serde(default, deserialize_with = "de::decimal_or_zero")]
    pub official_vehicle_allowance: Decimal,
    /// Night duty hours.
    #[serde(default, deserialize_with = "de::decimal_or_zero")]
    pub night_hours: Decimal,
    /// Weekend duty hours.
    #[serde(default, deserialize_with = "de::decimal_or_zero")]
    pub weekend_hours: Decimal,
    /// Public holiday duty hours.
    #[serde(default, deserialize_with = "de::decimal_or_zero")]
    pub holiday_hours: Decimal,
    /// Hours worked on a typical duty day.
    #[serde(default, deserialize_with = "de::decimal_or_zero")]
    pub daily_hours: Decimal,
    /// Whether call-back pay applies this period.
    #[serde(default, deserialize_with = "de::truthy")]
    pub call_back: bool,
    /// Number of call-backs.
    #[serde(default, deserialize_with = "de::decimal_or_zero")]
    pub call_back_count: Decimal,
    /// Hours on standby.
    #[serde(default, deserialize_with = "de::decimal_or_zero")]
    pub standby_hours: Decimal,
    /// Called in while on standby; voids standby pay.
    #[serde(default, deserialize_with = "de::truthy")]
    pub called_in: bool,
    /// Training days attended.
    #[serde(default, deserialize_with = "de::decimal_or_zero")]
    pub training_days: Decimal,
    /// Eligible for the special meal allowance.
    #[serde(default, deserialize_with = "de::truthy")]
    pub special_meal_eligible: bool,
    /// Consecutive duty days.
    #[serde(default, deserialize_with = "de::decimal_or_zero")]
    pub streak_days: Decimal,
    /// Unit the employee is assigned to.
    #[serde(default, deserialize_with = "de::optional_text")]
    pub unit: Option<String>,
}

impl Employee {
    /// Returns the recognised rank, if the rank name is one of [`Rank::ALL`].
    pub fn known_rank(&self) -> Option<Rank> {
        self.rank.as_deref().and_then(|r| r.parse().ok())
    }

    /// Returns the day of month of the promotion date.
    ///
    /// `None` when there is no promotion date or it is not a valid
    /// `YYYY-MM-DD` date.
    ///
    /// # Examples
    ///
    /// ```
    /// use louvois_ledger::models::Employee;
    ///
    /// let mut employee = Employee::default();
    /// employee.promotion_date = Some("2024-05-16".to_string());
    /// assert_eq!(employee.promotion_day(), Some(16));
    ///
    /// employee.promotion_date = Some("16/05/2024".to_string());
    /// assert_eq!(employee.promotion_day(), None);
    /// ```
    pub fn promotion_day(&self) -> Option<u32> {
        let text = self.promotion_date.as_deref()?;
        NaiveDate::parse_from_str(text, "%Y-%m-%d")
            .ok()
            .map(|date| date.day())
    }

    /// Returns true when both a promotion date and a new rank are recorded.
    pub fn has_promotion(&self) -> bool {
        let present = |field: &Option<String>| field.as_deref().is_some_and(|s| !s.is_empty());
        present(&self.promotion_date) && present(&self.new_rank)
    }

    /// Returns the identifier, or an empty string when absent.
    pub fn id_str(&self) -> &str {
        self.id.as_deref().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_deserialize_full_employee() {
        let json = r#"{
            "id": "E001",
            "name": "Alice",
            "rank": "Sergeant",
            "branch": "Navy",
            "months_in_service": 24,
            "seniority_years": 2,
            "promotion_date": "2024-05-16",
            "new_rank": "Lieutenant",
            "commute_km": 12.5,
            "night_hours": 10,
            "call_back": true,
            "call_back_count": 2,
            "unit": "U01"
        }"#;

        let employee: Employee = serde_json::from_str(json).unwrap();
        assert_eq!(employee.id.as_deref(), Some("E001"));
        assert_eq!(employee.known_rank(), Some(Rank::Sergeant));
        assert_eq!(employee.branch, Some(Branch::Navy));
        assert_eq!(employee.months_in_service, dec("24"));
        assert_eq!(employee.commute_km, Some(dec("12.5")));
        assert_eq!(employee.night_hours, dec("10"));
        assert!(employee.call_back);
        assert!(!employee.called_in);
        assert_eq!(employee.unit.as_deref(), Some("U01"));
        assert!(employee.has_promotion());
        assert_eq!(employee.promotion_day(), Some(16));
    }

    #[test]
    fn test_missing_fields_default() {
        let employee: Employee = serde_json::from_str(r#"{"id": "E009"}"#).unwrap();
        assert_eq!(employee.rank, None);
        assert_eq!(employee.seniority_years, Decimal::ZERO);
        assert_eq!(employee.commute_km, None);
        assert!(!employee.special_meal_eligible);
        assert!(!employee.has_promotion());
    }

    #[test]
    fn test_malformed_fields_default() {
        let json =
            r#"{"id": "E010", "night_hours": "lots", "commute_km": "far", "branch": "Marines"}"#;
        let employee: Employee = serde_json::from_str(json).unwrap();
        assert_eq!(employee.night_hours, Decimal::ZERO);
        assert_eq!(employee.commute_km, None);
        assert_eq!(employee.branch, None);
    }

    #[test]
    fn test_promotion_requires_both_fields() {
        let employee = Employee {
            promotion_date: Some("2024-05-16".to_string()),
            new_rank: Some(String::new()),
            ..Default::default()
        };
        assert!(!employee.has_promotion());
    }

    #[test]
    fn test_unknown_rank_is_not_recognised() {
        let employee = Employee {
            rank: Some("Admiral".to_string()),
            ..Default::default()
        };
        assert_eq!(employee.known_rank(), None);
    }

    #[test]
    fn test_rank_round_trips_through_str() {
        for rank in Rank::ALL {
            assert_eq!(rank.as_str().parse::<Rank>(), Ok(rank));
        }
        assert_eq!(Rank::Captain.to_string(), "Captain");
    }

    #[test]
    fn test_branch_serialization() {
        assert_eq!(
            serde_json::to_string(&Branch::AirForce).unwrap(),
            "\"AirForce\""
        );
        assert_eq!("Army".parse::<Branch>(), Ok(Branch::Army));
    }
}
