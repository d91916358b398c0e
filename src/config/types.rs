//! Typed views over the lookup-table document.
//!
//! Every configurable parameter has its default declared exactly once, as a
//! constant in this module, and every table is built from a
//! [`TableDocument`] through `get(domain, key, default)`.

use std::collections::HashMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::document::TableDocument;
use crate::lenient;

/// Days in the payroll month used for promotion pro-ration.
pub const DEFAULT_DAYS_IN_MONTH: Decimal = Decimal::from_parts(30, 0, 0, false, 0);
/// Months of service below which probation applies.
pub const DEFAULT_PROBATION_MONTHS: Decimal = Decimal::from_parts(6, 0, 0, false, 0);
/// Fraction of base salary paid during probation.
pub const DEFAULT_PROBATION_FACTOR: Decimal = Decimal::from_parts(8, 0, 0, false, 1);
/// Seniority allowance per year, as a fraction of base salary.
pub const DEFAULT_SENIORITY_RATE: Decimal = Decimal::from_parts(2, 0, 0, false, 2);
/// Ceiling on the seniority allowance.
pub const DEFAULT_SENIORITY_CAP: Decimal = Decimal::from_parts(800, 0, 0, false, 0);
/// Standard hours in a duty day before overtime.
pub const DEFAULT_DAILY_STANDARD_HOURS: Decimal = Decimal::from_parts(8, 0, 0, false, 0);
/// Multiplier applied to duty-hour allowances on a long streak.
pub const DEFAULT_FATIGUE_MULTIPLIER: Decimal = Decimal::ONE;
/// Exchange rate assumed for missions that do not state one.
pub const DEFAULT_EXCHANGE_RATE: Decimal = Decimal::ONE;

/// How the weekend allowance combines with the night allowance.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CombineMode {
    /// Both allowances are paid.
    #[default]
    Stack,
    /// The weekend allowance is dropped when it is smaller than the night
    /// allowance.
    Max,
}

impl CombineMode {
    fn parse(text: &str) -> Self {
        if text == "max" {
            CombineMode::Max
        } else {
            CombineMode::Stack
        }
    }
}

/// Monthly base salary by rank.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BaseSalaryTable {
    salaries: HashMap<String, Decimal>,
}

impl BaseSalaryTable {
    /// Creates a table from `rank -> salary` pairs.
    pub fn new(salaries: HashMap<String, Decimal>) -> Self {
        Self { salaries }
    }

    /// Returns the salary for a rank, if listed.
    pub fn salary_for(&self, rank: Option<&str>) -> Option<Decimal> {
        rank.and_then(|r| self.salaries.get(r)).copied()
    }
}

/// Probation policy.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProbationPolicy {
    /// Probation lasts while months in service is below this.
    pub probation_months: Decimal,
    /// Salary factor during probation.
    pub probation_factor: Decimal,
}

impl Default for ProbationPolicy {
    fn default() -> Self {
        Self {
            probation_months: DEFAULT_PROBATION_MONTHS,
            probation_factor: DEFAULT_PROBATION_FACTOR,
        }
    }
}

/// Seniority allowance policy.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeniorityPolicy {
    /// Fraction of base salary per year of seniority.
    pub seniority_rate: Decimal,
    /// Ceiling on the allowance.
    pub seniority_cap: Decimal,
}

impl Default for SeniorityPolicy {
    fn default() -> Self {
        Self {
            seniority_rate: DEFAULT_SENIORITY_RATE,
            seniority_cap: DEFAULT_SENIORITY_CAP,
        }
    }
}

/// Acting allowance policy.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ActingPolicy {
    /// Acting days must strictly exceed this to qualify.
    pub threshold_days: Decimal,
    /// Amount per acting day.
    pub per_day: Decimal,
}

/// A commute distance band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommuteBand {
    /// Upper bound of the band, inclusive.
    pub max_km: Decimal,
    /// Allowance paid within the band.
    pub allowance: Decimal,
}

/// Commute allowance bands, kept sorted by `max_km`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CommuteBands {
    bands: Vec<CommuteBand>,
}

impl CommuteBands {
    /// Creates the band list, sorting it ascending by `max_km`.
    pub fn new(mut bands: Vec<CommuteBand>) -> Self {
        bands.sort_by(|a, b| a.max_km.cmp(&b.max_km));
        Self { bands }
    }

    /// Returns the allowance of the first band covering `distance_km`.
    ///
    /// `None` when the distance is missing, not positive, or beyond every
    /// band; callers then fall back to the employee's flat allowance.
    ///
    /// # Examples
    ///
    /// ```
    /// use louvois_ledger::config::{CommuteBand, CommuteBands};
    /// use rust_decimal::Decimal;
    ///
    /// let bands = CommuteBands::new(vec![
    ///     CommuteBand {
    ///         max_km: Decimal::from(30),
    ///         allowance: Decimal::from(100),
    ///     },
    ///     CommuteBand {
    ///         max_km: Decimal::from(10),
    ///         allowance: Decimal::from(50),
    ///     },
    /// ]);
    /// assert_eq!(bands.lookup(Some(Decimal::from(25))), Some(Decimal::from(100)));
    /// assert_eq!(bands.lookup(Some(Decimal::from(10))), Some(Decimal::from(50)));
    /// assert_eq!(bands.lookup(Some(Decimal::ZERO)), None);
    /// assert_eq!(bands.lookup(Some(Decimal::from(31))), None);
    /// assert_eq!(bands.lookup(None), None);
    /// ```
    pub fn lookup(&self, distance_km: Option<Decimal>) -> Option<Decimal> {
        let km = distance_km.filter(|km| *km > Decimal::ZERO)?;
        self.bands
            .iter()
            .find(|band| km <= band.max_km)
            .map(|band| band.allowance)
    }

    fn from_document(doc: &TableDocument) -> Self {
        let bands = doc
            .list("commute_allowance_band")
            .iter()
            .filter_map(|band| {
                let max_km = band.get("max_km").and_then(lenient::to_decimal)?;
                let allowance = band
                    .get("allowance")
                    .and_then(lenient::to_decimal)
                    .unwrap_or(Decimal::ZERO);
                Some(CommuteBand { max_km, allowance })
            })
            .collect();
        Self::new(bands)
    }
}

/// Duty-hour, call-back, standby and training rates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DutyRates {
    /// Rate per night hour.
    pub night_rate: Decimal,
    /// Rate per weekend hour.
    pub weekend_rate: Decimal,
    /// Weekend/night combination mode.
    pub weekend_combine: CombineMode,
    /// Rate per public holiday hour.
    pub holiday_rate: Decimal,
    /// Hours in a standard duty day.
    pub daily_standard_hours: Decimal,
    /// Rate per overtime hour.
    pub overtime_rate: Decimal,
    /// Flat amount per call-back.
    pub call_back_flat: Decimal,
    /// Rate per standby hour.
    pub standby_rate: Decimal,
    /// Amount per training day.
    pub training_day_allowance: Decimal,
}

impl Default for DutyRates {
    fn default() -> Self {
        Self {
            night_rate: Decimal::ZERO,
            weekend_rate: Decimal::ZERO,
            weekend_combine: CombineMode::Stack,
            holiday_rate: Decimal::ZERO,
            daily_standard_hours: DEFAULT_DAILY_STANDARD_HOURS,
            overtime_rate: Decimal::ZERO,
            call_back_flat: Decimal::ZERO,
            standby_rate: Decimal::ZERO,
            training_day_allowance: Decimal::ZERO,
        }
    }
}

/// Mission-related tables: per-diems, hazard, combat, sea duty, joint
/// missions, prepaid recovery and cancellations.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MissionPolicy {
    /// Domestic per-diem by zone.
    pub per_diem_domestic: HashMap<String, Decimal>,
    /// International per-diem by country/city.
    pub per_diem_international: HashMap<String, Decimal>,
    /// Hazard pay per day, as a fraction of base salary.
    pub hazard_rate: Decimal,
    /// Minimum hazard pay per day.
    pub hazard_flat: Decimal,
    /// Flat combat allowance per combat mission.
    pub combat_allowance: Decimal,
    /// Shared ceiling on hazard plus combat; zero disables it.
    pub combat_cap: Decimal,
    /// Sea days needed to earn sea duty pay.
    pub sea_days_threshold: Decimal,
    /// Sea duty pay per sea day.
    pub sea_duty_bonus_per_day: Decimal,
    /// Bonus per joint mission.
    pub joint_mission_bonus: Decimal,
    /// Prepaid per-diem recovered per mission that ended early.
    pub default_prepaid_amount: Decimal,
    /// Cancellations at or under this many hours are compensated.
    pub cancel_threshold_hours: Decimal,
    /// Compensation per late cancellation.
    pub cancel_compensation_flat: Decimal,
}

/// Unit housing, barracks and meal policy.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HousingPolicy {
    /// Housing allowance by city, then rank.
    pub allowance_table: HashMap<String, HashMap<String, Decimal>>,
    /// Optional ceiling on the housing allowance; ignored unless positive.
    pub housing_cap: Option<Decimal>,
    /// Fee charged when the unit provides barracks.
    pub barracks_fee: Decimal,
    /// Fee charged when the unit provides meals.
    pub meal_deduction: Decimal,
    /// Allowance for members eligible for special meals.
    pub special_meal_allowance: Decimal,
}

impl HousingPolicy {
    /// Returns the housing allowance for a rank in a city.
    pub fn allowance_for(&self, city: &str, rank: Option<&str>) -> Option<Decimal> {
        let by_rank = self.allowance_table.get(city)?;
        rank.and_then(|r| by_rank.get(r)).copied()
    }
}

/// Fatigue policy.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FatiguePolicy {
    /// Streak length at which the multiplier applies.
    pub streak_threshold: Decimal,
    /// Multiplier for night, weekend, holiday and overtime allowances.
    pub fatigue_multiplier: Decimal,
}

impl Default for FatiguePolicy {
    fn default() -> Self {
        Self {
            streak_threshold: Decimal::ZERO,
            fatigue_multiplier: DEFAULT_FATIGUE_MULTIPLIER,
        }
    }
}

/// All lookup tables, typed.
///
/// `LookupTables::default()` is the configuration obtained from an empty
/// document.
#[derive(Debug, Clone, PartialEq)]
pub struct LookupTables {
    /// Base salary by rank.
    pub base_salary: BaseSalaryTable,
    /// Days in the payroll month.
    pub days_in_month: Decimal,
    /// Probation policy.
    pub probation: ProbationPolicy,
    /// Seniority policy.
    pub seniority: SeniorityPolicy,
    /// Acting policy.
    pub acting: ActingPolicy,
    /// Commute bands.
    pub commute_bands: CommuteBands,
    /// Duty-hour rates.
    pub duty: DutyRates,
    /// Mission tables.
    pub missions: MissionPolicy,
    /// Housing policy.
    pub housing: HousingPolicy,
    /// Fatigue policy.
    pub fatigue: FatiguePolicy,
}

impl Default for LookupTables {
    fn default() -> Self {
        Self {
            base_salary: BaseSalaryTable::default(),
            days_in_month: DEFAULT_DAYS_IN_MONTH,
            probation: ProbationPolicy::default(),
            seniority: SeniorityPolicy::default(),
            acting: ActingPolicy::default(),
            commute_bands: CommuteBands::default(),
            duty: DutyRates::default(),
            missions: MissionPolicy::default(),
            housing: HousingPolicy::default(),
            fatigue: FatiguePolicy::default(),
        }
    }
}

impl LookupTables {
    /// Builds the typed tables from a lookup-table document.
    pub fn from_document(doc: &TableDocument) -> Self {
        let zero = Decimal::ZERO;
        Self {
            base_salary: BaseSalaryTable::new(doc.amount_table("base_salary_table")),
            days_in_month: doc.get("payroll_period", "days_in_month", DEFAULT_DAYS_IN_MONTH),
            probation: ProbationPolicy {
                probation_months: doc.get(
                    "probation",
                    "probation_months",
                    DEFAULT_PROBATION_MONTHS,
                ),
                probation_factor: doc.get(
                    "probation",
                    "probation_factor",
                    DEFAULT_PROBATION_FACTOR,
                ),
            },
            seniority: SeniorityPolicy {
                seniority_rate: doc.get(
                    "seniority_allowance",
                    "seniority_rate",
                    DEFAULT_SENIORITY_RATE,
                ),
                seniority_cap: doc.get(
                    "seniority_allowance",
                    "seniority_cap",
                    DEFAULT_SENIORITY_CAP,
                ),
            },
            acting: ActingPolicy {
                threshold_days: doc.get("acting_allowance", "n", zero),
                per_day: doc.get("acting_allowance", "acting_allowance_per_day", zero),
            },
            commute_bands: CommuteBands::from_document(doc),
            duty: DutyRates {
                night_rate: doc.get("night_allowance", "night_rate", zero),
                weekend_rate: doc.get("weekend_allowance", "weekend_rate", zero),
                weekend_combine: CombineMode::parse(&doc.get_text(
                    "weekend_allowance",
                    "combine_with_night",
                    "stack",
                )),
                holiday_rate: doc.get("holiday_allowance", "holiday_rate", zero),
                daily_standard_hours: doc.get(
                    "overtime",
                    "daily_standard_hours",
                    DEFAULT_DAILY_STANDARD_HOURS,
                ),
                overtime_rate: doc.get("overtime", "overtime_rate", zero),
                call_back_flat: doc.get("call_back", "call_back_flat", zero),
                standby_rate: doc.get("standby", "standby_rate", zero),
                training_day_allowance: doc.get("training", "training_day_allowance", zero),
            },
            missions: MissionPolicy {
                per_diem_domestic: doc.amount_table("per_diem_domestic"),
                per_diem_international: doc.amount_table("per_diem_international"),
                hazard_rate: doc.get("hazard", "hazard_rate", zero),
                hazard_flat: doc.get("hazard", "hazard_flat", zero),
                combat_allowance: doc.get("combat", "combat_allowance", zero),
                combat_cap: doc.get("combat", "combat_cap", zero),
                sea_days_threshold: doc.get("sea_duty", "sea_days_threshold", zero),
                sea_duty_bonus_per_day: doc.get("sea_duty", "sea_duty_bonus_per_day", zero),
                joint_mission_bonus: doc.get("joint_mission", "joint_mission_bonus", zero),
                default_prepaid_amount: doc.get("prepaid", "default_prepaid_amount", zero),
                cancel_threshold_hours: doc.get("cancel", "cancel_threshold_hours", zero),
                cancel_compensation_flat: doc.get("cancel", "cancel_compensation_flat", zero),
            },
            housing: HousingPolicy {
                allowance_table: doc.nested_amount_table("housing_allowance_table"),
                housing_cap: doc.scalar("housing_cap"),
                barracks_fee: doc.scalar("barracks_fee").unwrap_or(zero),
                meal_deduction: doc.scalar("meal_deduction").unwrap_or(zero),
                special_meal_allowance: doc.scalar("special_meal_allowance").unwrap_or(zero),
            },
            fatigue: FatiguePolicy {
                streak_threshold: doc.get("fatigue", "streak_threshold", zero),
                fatigue_multiplier: doc.get(
                    "fatigue",
                    "fatigue_multiplier",
                    DEFAULT_FATIGUE_MULTIPLIER,
                ),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_empty_document_yields_defaults() {
        let tables = LookupTables::from_document(&TableDocument::new(json!({})));
        assert_eq!(tables, LookupTables::default());
        assert_eq!(tables.probation.probation_months, dec("6"));
        assert_eq!(tables.probation.probation_factor, dec("0.8"));
        assert_eq!(tables.seniority.seniority_rate, dec("0.02"));
        assert_eq!(tables.seniority.seniority_cap, dec("800"));
        assert_eq!(tables.duty.daily_standard_hours, dec("8"));
        assert_eq!(tables.fatigue.fatigue_multiplier, dec("1"));
        assert_eq!(tables.days_in_month, dec("30"));
    }

    #[test]
    fn test_configured_values_override_defaults() {
        let doc = TableDocument::new(json!({
            "base_salary_table": {"Private": 1000},
            "acting_allowance": {"n": 3, "acting_allowance_per_day": 40},
            "weekend_allowance": {"weekend_rate": 15, "combine_with_night": "max"},
            "combat": {"combat_allowance": 300, "combat_cap": 600},
            "housing_cap": 450,
            "meal_deduction": 90
        }));
        let tables = LookupTables::from_document(&doc);
        assert_eq!(tables.base_salary.salary_for(Some("Private")), Some(dec("1000")));
        assert_eq!(tables.base_salary.salary_for(Some("General")), None);
        assert_eq!(tables.base_salary.salary_for(None), None);
        assert_eq!(tables.acting.threshold_days, dec("3"));
        assert_eq!(tables.duty.weekend_combine, CombineMode::Max);
        assert_eq!(tables.missions.combat_cap, dec("600"));
        assert_eq!(tables.housing.housing_cap, Some(dec("450")));
        assert_eq!(tables.housing.meal_deduction, dec("90"));
        assert_eq!(tables.housing.barracks_fee, Decimal::ZERO);
    }

    #[test]
    fn test_unknown_combine_mode_stacks() {
        let doc = TableDocument::new(json!({"weekend_allowance": {"combine_with_night": "min"}}));
        let tables = LookupTables::from_document(&doc);
        assert_eq!(tables.duty.weekend_combine, CombineMode::Stack);
    }

    /// CB-001: band selection picks the first band at or above the distance
    #[test]
    fn test_commute_band_selection() {
        let doc = TableDocument::new(json!({
            "commute_allowance_band": [
                {"max_km": 30, "allowance": 100},
                {"max_km": 10, "allowance": 50},
                {"allowance": 999}
            ]
        }));
        let bands = LookupTables::from_document(&doc).commute_bands;
        assert_eq!(bands.lookup(Some(dec("25"))), Some(dec("100")));
        assert_eq!(bands.lookup(Some(dec("5"))), Some(dec("50")));
        assert_eq!(bands.lookup(Some(dec("30"))), Some(dec("100")));
    }

    /// CB-002: non-positive or out-of-range distances fall back
    #[test]
    fn test_commute_band_no_match() {
        let bands = CommuteBands::new(vec![
            CommuteBand {
                max_km: dec("10"),
                allowance: dec("50"),
            },
            CommuteBand {
                max_km: dec("30"),
                allowance: dec("100"),
            },
        ]);
        assert_eq!(bands.lookup(Some(Decimal::ZERO)), None);
        assert_eq!(bands.lookup(Some(dec("-4"))), None);
        assert_eq!(bands.lookup(Some(dec("30.5"))), None);
        assert_eq!(bands.lookup(None), None);
    }

    #[test]
    fn test_band_without_allowance_pays_zero() {
        let doc = TableDocument::new(json!({"commute_allowance_band": [{"max_km": 10}]}));
        let bands = LookupTables::from_document(&doc).commute_bands;
        assert_eq!(bands.lookup(Some(dec("3"))), Some(Decimal::ZERO));
    }

    #[test]
    fn test_housing_allowance_lookup() {
        let doc = TableDocument::new(json!({
            "housing_allowance_table": {"Taipei": {"Private": 300, "Captain": 600}}
        }));
        let housing = LookupTables::from_document(&doc).housing;
        assert_eq!(housing.allowance_for("Taipei", Some("Captain")), Some(dec("600")));
        assert_eq!(housing.allowance_for("Taipei", Some("Major")), None);
        assert_eq!(housing.allowance_for("Tainan", Some("Private")), None);
    }
}
