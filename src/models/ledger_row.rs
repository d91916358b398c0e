//! Ledger row model.
//!
//! A [`LedgerRow`] is the complete, unrounded result of evaluating one
//! employee. Rounding to cents happens only when the row is rendered by
//! [`crate::ledger`].

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculation::amount;

/// One employee's computed pay components and total.
///
/// # Example
///
/// ```
/// use louvois_ledger::models::LedgerRow;
/// use rust_decimal::Decimal;
///
/// let row = LedgerRow {
///     id: Some("E001".to_string()),
///     base_salary: Decimal::from(800),
///     total_base: Decimal::from(800),
///     ..Default::default()
/// };
/// assert_eq!(row.signed_total(), row.total_base);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerRow {
    /// Employee identifier.
    pub id: Option<String>,
    /// Employee name.
    pub name: Option<String>,
    /// Rank at the start of the month.
    pub rank: Option<String>,
    /// Promotion date as recorded.
    pub promotion_date: Option<String>,
    /// Rank after promotion, as recorded.
    pub new_rank: Option<String>,
    /// Months in service.
    pub months_in_service: Decimal,
    /// Base salary after promotion pro-ration, before probation.
    pub base_salary_raw: Decimal,
    /// Base salary after probation.
    pub base_salary: Decimal,
    /// Seniority allowance.
    pub seniority_allowance: Decimal,
    /// Acting allowance.
    pub acting_allowance: Decimal,
    /// Commute allowance (distance band or flat fallback).
    pub commute_allowance: Decimal,
    /// Larger of the legacy housing allowance and barracks subsidy.
    pub selected_housing_allowance: Decimal,
    /// Larger of the commute and official vehicle allowances.
    pub selected_transport_allowance: Decimal,
    /// Night duty allowance, after fatigue scaling.
    pub night_allowance: Decimal,
    /// Weekend duty allowance, after fatigue scaling.
    pub weekend_allowance: Decimal,
    /// Holiday duty allowance, after fatigue scaling.
    pub holiday_allowance: Decimal,
    /// Overtime allowance, after fatigue scaling.
    pub overtime_allowance: Decimal,
    /// Call-back allowance.
    pub call_back_allowance: Decimal,
    /// Standby allowance.
    pub standby_allowance: Decimal,
    /// Training allowance.
    pub training_allowance: Decimal,
    /// Domestic per-diem.
    pub per_diem_domestic: Decimal,
    /// International per-diem, converted.
    pub per_diem_international: Decimal,
    /// Hazard allowance.
    pub hazard_allowance: Decimal,
    /// Combat allowance, after the shared hazard/combat cap.
    pub combat_allowance: Decimal,
    /// Sea duty allowance.
    pub sea_duty_allowance: Decimal,
    /// Joint mission bonus.
    pub joint_mission_bonus: Decimal,
    /// Prepaid per-diem recovered for missions that ended early.
    pub per_diem_recovery: Decimal,
    /// Compensation for late mission cancellations.
    pub cancel_compensation: Decimal,
    /// Unit-based housing allowance, after the housing cap.
    pub housing_allowance: Decimal,
    /// Barracks fee.
    pub barracks_deduction: Decimal,
    /// Meal fee.
    pub meal_deduction: Decimal,
    /// Special meal allowance.
    pub special_meal_allowance: Decimal,
    /// Fatigue multiplier actually applied to duty-hour allowances.
    pub fatigue_multiplier: Decimal,
    /// Signed sum of all components.
    pub total_base: Decimal,
}

impl LedgerRow {
    /// Recomputes the signed sum of the row's components.
    ///
    /// Per-diem recovery, barracks deduction and meal deduction subtract;
    /// every other component adds. `base_salary_raw`, `commute_allowance`
    /// and `fatigue_multiplier` are informational and excluded. A sum that
    /// leaves the `Decimal` range is reported as zero.
    pub fn signed_total(&self) -> Decimal {
        amount::sum(
            "total_base",
            &[
                self.base_salary,
                self.seniority_allowance,
                self.acting_allowance,
                self.selected_housing_allowance,
                self.selected_transport_allowance,
                self.night_allowance,
                self.weekend_allowance,
                self.holiday_allowance,
                self.overtime_allowance,
                self.call_back_allowance,
                self.standby_allowance,
                self.training_allowance,
                self.per_diem_domestic,
                self.per_diem_international,
                self.hazard_allowance,
                self.combat_allowance,
                self.sea_duty_allowance,
                self.joint_mission_bonus,
                -self.per_diem_recovery,
                self.cancel_compensation,
                self.housing_allowance,
                -self.barracks_deduction,
                -self.meal_deduction,
                self.special_meal_allowance,
            ],
        )
    }
}
