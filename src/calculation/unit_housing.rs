//! Unit-based housing, barracks and meal adjustments.
//!
//! These depend on what the employee's unit provides: a unit with barracks
//! charges a barracks fee instead of paying a housing allowance, and a unit
//! that feeds its members charges a meal fee.

use rust_decimal::Decimal;

use crate::config::HousingPolicy;
use crate::models::{Employee, Unit};

/// Housing and meal adjustments for one employee.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UnitHousingResult {
    /// Housing allowance from the city/rank table, after the housing cap.
    pub housing_allowance: Decimal,
    /// Barracks fee, charged when the unit provides barracks.
    pub barracks_deduction: Decimal,
    /// Meal fee, charged when the unit provides meals.
    pub meal_deduction: Decimal,
    /// Special meal allowance for eligible employees.
    pub special_meal_allowance: Decimal,
}

/// Calculates the unit-based housing allowance and deductions.
///
/// - Housing allowance: looked up by the unit's location and the employee's
///   rank, only when the unit does not provide barracks. Anything above a
///   positive housing cap is the employee's own expense.
/// - Barracks deduction: the barracks fee when the unit provides barracks.
/// - Meal deduction: the meal fee when the unit provides meals.
/// - Special meal allowance: paid to eligible employees, independently of
///   the meal deduction.
///
/// An employee whose unit cannot be found is treated as belonging to a unit
/// with no location that provides nothing.
pub fn calculate_unit_housing(
    employee: &Employee,
    unit: Option<&Unit>,
    policy: &HousingPolicy,
) -> UnitHousingResult {
    let barracks_provided = unit.is_some_and(|u| u.barracks_provided);
    let meals_provided = unit.is_some_and(|u| u.meals_provided);
    let city = unit
        .and_then(|u| u.location.as_deref())
        .filter(|city| !city.is_empty());

    let table_allowance = match city {
        Some(city) if !barracks_provided => policy
            .allowance_for(city, employee.rank.as_deref())
            .unwrap_or(Decimal::ZERO),
        _ => Decimal::ZERO,
    };

    let housing_allowance = match policy.housing_cap {
        Some(cap) if cap > Decimal::ZERO => table_allowance.min(cap),
        _ => table_allowance,
    };

    UnitHousingResult {
        housing_allowance,
        barracks_deduction: if barracks_provided {
            policy.barracks_fee
        } else {
            Decimal::ZERO
        },
        meal_deduction: if meals_provided {
            policy.meal_deduction
        } else {
            Decimal::ZERO
        },
        special_meal_allowance: if employee.special_meal_eligible {
            policy.special_meal_allowance
        } else {
            Decimal::ZERO
        },
    }
}
