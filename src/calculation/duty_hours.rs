//! Duty-hour allowances and the fatigue multiplier.
//!
//! Night, weekend, holiday and overtime allowances are computed from the
//! employee's hour counters. When the employee's consecutive-duty streak
//! reaches the fatigue threshold, all four are scaled by the fatigue
//! multiplier; no other allowance is affected.

use rust_decimal::Decimal;

use super::amount;
use crate::config::{CombineMode, DutyRates, FatiguePolicy};
use crate::models::Employee;

/// The four duty-hour allowances.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DutyHourAllowances {
    /// Night duty allowance.
    pub night: Decimal,
    /// Weekend duty allowance.
    pub weekend: Decimal,
    /// Public holiday duty allowance.
    pub holiday: Decimal,
    /// Overtime allowance.
    pub overtime: Decimal,
}

impl DutyHourAllowances {
    /// Returns the allowances multiplied by `multiplier`.
    pub fn scaled(self, multiplier: Decimal) -> Self {
        Self {
            night: amount::product("night_allowance", &[self.night, multiplier]),
            weekend: amount::product("weekend_allowance", &[self.weekend, multiplier]),
            holiday: amount::product("holiday_allowance", &[self.holiday, multiplier]),
            overtime: amount::product("overtime_allowance", &[self.overtime, multiplier]),
        }
    }
}

/// Calculates the night, weekend, holiday and overtime allowances.
///
/// - night = `night_hours × night_rate`
/// - weekend = `weekend_hours × weekend_rate`; in [`CombineMode::Max`] it is
///   dropped entirely (not reduced) when smaller than the night allowance
/// - holiday = `holiday_hours × holiday_rate`
/// - overtime = `max(daily_hours − daily_standard_hours, 0) × overtime_rate`
///
/// An allowance whose product leaves the `Decimal` range is zero.
///
/// # Examples
///
/// ```
/// use louvois_ledger::calculation::calculate_duty_hour_allowances;
/// use louvois_ledger::config::DutyRates;
/// use louvois_ledger::models::Employee;
/// use rust_decimal::Decimal;
///
/// let rates = DutyRates {
///     overtime_rate: Decimal::from(30),
///     ..Default::default()
/// };
/// let employee = Employee {
///     daily_hours: Decimal::from(10),
///     ..Default::default()
/// };
///
/// let allowances = calculate_duty_hour_allowances(&employee, &rates);
/// assert_eq!(allowances.overtime, Decimal::from(60));
/// ```
pub fn calculate_duty_hour_allowances(
    employee: &Employee,
    rates: &DutyRates,
) -> DutyHourAllowances {
    let night = amount::product("night_allowance", &[employee.night_hours, rates.night_rate]);

    let stacked_weekend = amount::product(
        "weekend_allowance",
        &[employee.weekend_hours, rates.weekend_rate],
    );
    let weekend = match rates.weekend_combine {
        CombineMode::Max if stacked_weekend < night => Decimal::ZERO,
        _ => stacked_weekend,
    };

    let holiday = amount::product(
        "holiday_allowance",
        &[employee.holiday_hours, rates.holiday_rate],
    );

    let overtime_hours = amount::difference(
        "overtime_allowance",
        employee.daily_hours,
        rates.daily_standard_hours,
    )
    .max(Decimal::ZERO);
    let overtime = amount::product("overtime_allowance", &[overtime_hours, rates.overtime_rate]);

    DutyHourAllowances {
        night,
        weekend,
        holiday,
        overtime,
    }
}

/// Returns the fatigue multiplier that applies to an employee: the
/// configured multiplier once `streak_days` reaches the streak threshold,
/// otherwise one.
pub fn fatigue_multiplier(streak_days: Decimal, policy: &FatiguePolicy) -> Decimal {
    if streak_days >= policy.streak_threshold {
        policy.fatigue_multiplier
    } else {
        Decimal::ONE
    }
}
