//! Mission aggregation.
//!
//! Missions are credited per unit: every member of a unit earns from every
//! mission that unit flew. This module folds a unit's missions into
//! [`MissionTotals`] and then applies the shared hazard/combat cap.

use std::collections::HashMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::amount;
use crate::config::{DEFAULT_EXCHANGE_RATE, MissionPolicy};
use crate::models::Mission;

/// Mission-derived amounts for one employee.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MissionTotals {
    /// Domestic per-diem.
    pub per_diem_domestic: Decimal,
    /// International per-diem, converted at each mission's exchange rate.
    pub per_diem_international: Decimal,
    /// At least one mission entered a hazard zone.
    pub hazard_exposure: bool,
    /// Hazard allowance.
    pub hazard_allowance: Decimal,
    /// Combat allowance.
    pub combat_allowance: Decimal,
    /// Sea duty allowance.
    pub sea_duty_allowance: Decimal,
    /// Joint mission bonus.
    pub joint_mission_bonus: Decimal,
    /// Prepaid per-diem to claw back.
    pub per_diem_recovery: Decimal,
    /// Late cancellation compensation.
    pub cancel_compensation: Decimal,
}

impl MissionTotals {
    /// Adds one mission's contributions.
    ///
    /// `base_salary` is the employee's post-probation salary, which sets the
    /// daily hazard pay together with the hazard rate and flat minimum.
    fn accrue(mut self, mission: &Mission, base_salary: Decimal, policy: &MissionPolicy) -> Self {
        let trip_days = mission.trip_days;

        let domestic_rate = lookup(&policy.per_diem_domestic, mission.domestic_zone.as_deref());
        self.per_diem_domestic =
            accumulate("per_diem_domestic", self.per_diem_domestic, &[trip_days, domestic_rate]);

        let international_rate =
            lookup(&policy.per_diem_international, mission.country_city.as_deref());
        let exchange_rate = mission.exchange_rate.unwrap_or(DEFAULT_EXCHANGE_RATE);
        self.per_diem_international = accumulate(
            "per_diem_international",
            self.per_diem_international,
            &[trip_days, international_rate, exchange_rate],
        );

        if mission.hazard_zone {
            self.hazard_exposure = true;
            let daily_hazard =
                amount::product("hazard_allowance", &[base_salary, policy.hazard_rate])
                    .max(policy.hazard_flat);
            self.hazard_allowance =
                accumulate("hazard_allowance", self.hazard_allowance, &[daily_hazard, trip_days]);
        }

        if mission.is_combat() {
            self.combat_allowance =
                accumulate("combat_allowance", self.combat_allowance, &[policy.combat_allowance]);
        }

        if mission.sea_days >= policy.sea_days_threshold {
            self.sea_duty_allowance = accumulate(
                "sea_duty_allowance",
                self.sea_duty_allowance,
                &[mission.sea_days, policy.sea_duty_bonus_per_day],
            );
        }

        if mission.joint_mission {
            self.joint_mission_bonus = accumulate(
                "joint_mission_bonus",
                self.joint_mission_bonus,
                &[policy.joint_mission_bonus],
            );
        }

        if mission.ended_early() {
            self.per_diem_recovery = accumulate(
                "per_diem_recovery",
                self.per_diem_recovery,
                &[policy.default_prepaid_amount],
            );
        }

        if mission
            .cancel_hours_before
            .is_some_and(|hours| hours <= policy.cancel_threshold_hours)
        {
            self.cancel_compensation = accumulate(
                "cancel_compensation",
                self.cancel_compensation,
                &[policy.cancel_compensation_flat],
            );
        }

        self
    }

    /// Caps the combat allowance so that hazard plus combat never exceeds
    /// `combat_cap`. A cap of zero or less disables the rule. The hazard
    /// allowance itself is never reduced.
    ///
    /// # Examples
    ///
    /// ```
    /// use louvois_ledger::calculation::MissionTotals;
    /// use rust_decimal::Decimal;
    ///
    /// let totals = MissionTotals {
    ///     hazard_allowance: Decimal::from(500),
    ///     combat_allowance: Decimal::from(300),
    ///     ..Default::default()
    /// };
    /// let capped = totals.with_combat_cap(Decimal::from(600));
    /// assert_eq!(capped.combat_allowance, Decimal::from(100));
    /// assert_eq!(capped.hazard_allowance, Decimal::from(500));
    /// ```
    pub fn with_combat_cap(mut self, combat_cap: Decimal) -> Self {
        if combat_cap <= Decimal::ZERO {
            return self;
        }
        let shared = amount::sum(
            "combat_allowance",
            &[self.hazard_allowance, self.combat_allowance],
        );
        if shared > combat_cap {
            self.combat_allowance =
                amount::difference("combat_allowance", combat_cap, self.hazard_allowance)
                    .max(Decimal::ZERO);
        }
        self
    }
}

/// Adds the product of `factors` to `total`; either step leaving the
/// `Decimal` range yields zero.
fn accumulate(rule: &str, total: Decimal, factors: &[Decimal]) -> Decimal {
    amount::sum(rule, &[total, amount::product(rule, factors)])
}

fn lookup(table: &HashMap<String, Decimal>, key: Option<&str>) -> Decimal {
    key.and_then(|k| table.get(k))
        .copied()
        .unwrap_or(Decimal::ZERO)
}

/// Aggregates every mission of the employee's unit into [`MissionTotals`].
///
/// Missions of other units are ignored. An employee with no unit matches
/// missions that also carry no unit.
///
/// # Arguments
///
/// * `unit` - The employee's unit reference
/// * `missions` - All mission records of the run
/// * `base_salary` - The employee's post-probation base salary
/// * `policy` - Mission tables
///
/// # Examples
///
/// ```
/// use louvois_ledger::calculation::aggregate_missions;
/// use louvois_ledger::config::MissionPolicy;
/// use louvois_ledger::models::Mission;
/// use rust_decimal::Decimal;
/// use std::collections::HashMap;
///
/// let policy = MissionPolicy {
///     per_diem_domestic: HashMap::from([("north".to_string(), Decimal::from(40))]),
///     ..Default::default()
/// };
/// let missions = vec![
///     Mission {
///         unit: Some("U01".to_string()),
///         trip_days: Decimal::from(3),
///         domestic_zone: Some("north".to_string()),
///         ..Default::default()
///     },
///     Mission {
///         unit: Some("U02".to_string()),
///         trip_days: Decimal::from(9),
///         domestic_zone: Some("north".to_string()),
///         ..Default::default()
///     },
/// ];
///
/// let totals = aggregate_missions(Some("U01"), &missions, Decimal::from(1000), &policy);
/// assert_eq!(totals.per_diem_domestic, Decimal::from(120));
/// ```
pub fn aggregate_missions(
    unit: Option<&str>,
    missions: &[Mission],
    base_salary: Decimal,
    policy: &MissionPolicy,
) -> MissionTotals {
    missions
        .iter()
        .filter(|mission| mission.unit.as_deref() == unit)
        .fold(MissionTotals::default(), |totals, mission| {
            totals.accrue(mission, base_salary, policy)
        })
        .with_combat_cap(policy.combat_cap)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn policy() -> MissionPolicy {
        MissionPolicy {
            per_diem_domestic: HashMap::from([("north".to_string(), dec("40"))]),
            per_diem_international: HashMap::from([("Tokyo".to_string(), dec("100"))]),
            hazard_rate: dec("0.01"),
            hazard_flat: dec("20"),
            combat_allowance: dec("300"),
            combat_cap: Decimal::ZERO,
            sea_days_threshold: dec("5"),
            sea_duty_bonus_per_day: dec("25"),
            joint_mission_bonus: dec("150"),
            default_prepaid_amount: dec("80"),
            cancel_threshold_hours: dec("24"),
            cancel_compensation_flat: dec("60"),
        }
    }

    fn mission(unit: &str, trip_days: &str) -> Mission {
        Mission {
            unit: Some(unit.to_string()),
            trip_days: dec(trip_days),
            ..Default::default()
        }
    }

    fn aggregate(missions: &[Mission]) -> MissionTotals {
        aggregate_missions(Some("U01"), missions, dec("1000"), &policy())
    }

    /// MA-001: no missions, nothing accrues
    #[test]
    fn test_ma_001_no_missions() {
        assert_eq!(aggregate(&[]), MissionTotals::default());
    }

    /// MA-002: only the employee's unit counts
    #[test]
    fn test_ma_002_other_units_ignored() {
        let other = Mission {
            hazard_zone: true,
            domestic_zone: Some("north".to_string()),
            ..mission("U02", "5")
        };
        assert_eq!(aggregate(&[other]), MissionTotals::default());
    }

    /// MA-003: domestic and international per-diem
    #[test]
    fn test_ma_003_per_diems() {
        let domestic = Mission {
            domestic_zone: Some("north".to_string()),
            ..mission("U01", "3")
        };
        let abroad = Mission {
            country_city: Some("Tokyo".to_string()),
            exchange_rate: Some(dec("0.5")),
            ..mission("U01", "4")
        };
        let unknown_zone = Mission {
            domestic_zone: Some("south".to_string()),
            ..mission("U01", "2")
        };
        let totals = aggregate(&[domestic, abroad, unknown_zone]);
        assert_eq!(totals.per_diem_domestic, dec("120"));
        assert_eq!(totals.per_diem_international, dec("200"));
    }

    /// MA-004: missing exchange rate converts at one
    #[test]
    fn test_ma_004_default_exchange_rate() {
        let abroad = Mission {
            country_city: Some("Tokyo".to_string()),
            ..mission("U01", "2")
        };
        assert_eq!(aggregate(&[abroad]).per_diem_international, dec("200"));
    }

    /// MA-005: hazard pays the larger of rate and flat per day
    #[test]
    fn test_ma_005_hazard_rate_versus_flat() {
        let hazard = Mission {
            hazard_zone: true,
            ..mission("U01", "3")
        };
        // 1000 × 0.01 = 10 < flat 20
        let totals = aggregate(std::slice::from_ref(&hazard));
        assert!(totals.hazard_exposure);
        assert_eq!(totals.hazard_allowance, dec("60"));

        // 5000 × 0.01 = 50 > flat 20
        let totals = aggregate_missions(Some("U01"), &[hazard], dec("5000"), &policy());
        assert_eq!(totals.hazard_allowance, dec("150"));
    }

    /// MA-006: flat combat allowance per combat mission, uncapped by default
    #[test]
    fn test_ma_006_combat_per_mission() {
        let combat = Mission {
            mission_type: Some("combat".to_string()),
            ..mission("U01", "1")
        };
        let patrol = Mission {
            mission_type: Some("patrol".to_string()),
            ..mission("U01", "1")
        };
        let totals = aggregate(&[combat.clone(), combat, patrol]);
        assert_eq!(totals.combat_allowance, dec("600"));
    }

    /// MA-007: sea duty requires the day threshold
    #[test]
    fn test_ma_007_sea_duty_threshold() {
        let long = Mission {
            sea_days: dec("6"),
            ..mission("U01", "6")
        };
        let short = Mission {
            sea_days: dec("4"),
            ..mission("U01", "4")
        };
        assert_eq!(aggregate(&[long, short]).sea_duty_allowance, dec("150"));
    }

    /// MA-008: joint mission bonus per joint mission
    #[test]
    fn test_ma_008_joint_mission() {
        let joint = Mission {
            joint_mission: true,
            ..mission("U01", "2")
        };
        assert_eq!(aggregate(&[joint]).joint_mission_bonus, dec("150"));
    }

    /// MA-009: early return claws back the prepaid amount
    #[test]
    fn test_ma_009_recovery() {
        let early = Mission {
            planned_days: Some(dec("5")),
            actual_days: Some(dec("3")),
            ..mission("U01", "5")
        };
        let on_time = Mission {
            planned_days: Some(dec("5")),
            actual_days: Some(dec("5")),
            ..mission("U01", "5")
        };
        assert_eq!(aggregate(&[early, on_time]).per_diem_recovery, dec("80"));
    }

    /// MA-010: late cancellations are compensated, early ones are not
    #[test]
    fn test_ma_010_cancellation() {
        let late = Mission {
            cancel_hours_before: Some(dec("24")),
            ..mission("U01", "0")
        };
        let early = Mission {
            cancel_hours_before: Some(dec("48")),
            ..mission("U01", "0")
        };
        let not_cancelled = mission("U01", "2");
        assert_eq!(
            aggregate(&[late, early, not_cancelled]).cancel_compensation,
            dec("60")
        );
    }

    /// MA-011: combat is capped against the hazard already accrued
    #[test]
    fn test_ma_011_combat_cap() {
        let totals = MissionTotals {
            hazard_allowance: dec("500"),
            combat_allowance: dec("300"),
            ..Default::default()
        };
        assert_eq!(totals.clone().with_combat_cap(dec("600")).combat_allowance, dec("100"));
        assert_eq!(totals.clone().with_combat_cap(dec("400")).combat_allowance, Decimal::ZERO);
        assert_eq!(totals.clone().with_combat_cap(dec("900")).combat_allowance, dec("300"));
        assert_eq!(totals.with_combat_cap(Decimal::ZERO).combat_allowance, dec("300"));
    }

    /// MA-012: cap is applied after the fold
    #[test]
    fn test_ma_012_cap_applied_in_aggregation() {
        let policy = MissionPolicy {
            combat_cap: dec("400"),
            ..policy()
        };
        let combat_hazard = Mission {
            hazard_zone: true,
            mission_type: Some("combat".to_string()),
            ..mission("U01", "10")
        };
        let totals = aggregate_missions(Some("U01"), &[combat_hazard], dec("1000"), &policy);
        assert_eq!(totals.hazard_allowance, dec("200"));
        assert_eq!(totals.combat_allowance, dec("200"));
    }

    #[test]
    fn test_unassigned_employee_matches_unassigned_missions() {
        let stray = Mission {
            unit: None,
            joint_mission: true,
            ..Default::default()
        };
        let totals = aggregate_missions(None, &[stray], dec("1000"), &policy());
        assert_eq!(totals.joint_mission_bonus, dec("150"));
    }
}
