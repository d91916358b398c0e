//! Base salary determination.
//!
//! This module looks up the rank salary, pro-rates it across a mid-month
//! promotion, and applies the probation reduction.

use rust_decimal::Decimal;

use super::amount;
use crate::config::{BaseSalaryTable, ProbationPolicy};
use crate::models::Employee;

/// The result of determining an employee's base salary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BaseSalaryResult {
    /// Salary after promotion pro-ration, before probation.
    pub raw: Decimal,
    /// Salary after probation.
    pub salary: Decimal,
    /// Whether a promotion split was applied.
    pub prorated: bool,
    /// Whether the probation factor was applied.
    pub on_probation: bool,
}

/// Determines an employee's monthly base salary.
///
/// The steps are:
/// 1. Look up the salary for the employee's rank (zero if unlisted).
/// 2. If the employee has both a promotion date and a new rank, split the
///    month at the promotion day: days before it are paid at the old rank,
///    the promotion day onward at the new rank (the old rank's salary when
///    the new rank is unlisted). An unparseable date skips the split.
/// 3. If `months_in_service` is below the probation threshold, multiply by
///    the probation factor. Probation looks only at months in service; a
///    promotion in the same month does not reset or otherwise affect it.
///
/// # Arguments
///
/// * `employee` - The employee being paid
/// * `salaries` - Base salary by rank
/// * `days_in_month` - Days in the payroll month
/// * `probation` - The probation policy
///
/// # Examples
///
/// ```
/// use louvois_ledger::calculation::calculate_base_salary;
/// use louvois_ledger::config::{BaseSalaryTable, ProbationPolicy};
/// use louvois_ledger::models::Employee;
/// use rust_decimal::Decimal;
/// use std::collections::HashMap;
///
/// let salaries = BaseSalaryTable::new(HashMap::from([
///     ("Private".to_string(), Decimal::from(1000)),
/// ]));
/// let employee = Employee {
///     rank: Some("Private".to_string()),
///     months_in_service: Decimal::from(3),
///     ..Default::default()
/// };
///
/// let result = calculate_base_salary(
///     &employee,
///     &salaries,
///     Decimal::from(30),
///     &ProbationPolicy::default(),
/// );
/// assert_eq!(result.raw, Decimal::from(1000));
/// assert_eq!(result.salary, Decimal::from(800));
/// assert!(result.on_probation);
/// ```
pub fn calculate_base_salary(
    employee: &Employee,
    salaries: &BaseSalaryTable,
    days_in_month: Decimal,
    probation: &ProbationPolicy,
) -> BaseSalaryResult {
    let rank_salary = salaries
        .salary_for(employee.rank.as_deref())
        .unwrap_or(Decimal::ZERO);

    let prorated_salary = prorate_for_promotion(employee, rank_salary, salaries, days_in_month);
    let raw = prorated_salary.unwrap_or(rank_salary);

    let on_probation = employee.months_in_service < probation.probation_months;
    let salary = if on_probation {
        amount::product("base_salary", &[raw, probation.probation_factor])
    } else {
        raw
    };

    BaseSalaryResult {
        raw,
        salary,
        prorated: prorated_salary.is_some(),
        on_probation,
    }
}

/// Splits the month between the old and new rank salaries.
///
/// Returns `None` when no split applies: no promotion recorded, an
/// unparseable promotion date, or a non-positive month length.
fn prorate_for_promotion(
    employee: &Employee,
    old_salary: Decimal,
    salaries: &BaseSalaryTable,
    days_in_month: Decimal,
) -> Option<Decimal> {
    if !employee.has_promotion() || days_in_month <= Decimal::ZERO {
        return None;
    }
    let promotion_day = Decimal::from(employee.promotion_day()?);

    let old_days = (promotion_day - Decimal::ONE).max(Decimal::ZERO);
    let new_days =
        amount::difference("base_salary_raw", days_in_month, old_days).max(Decimal::ZERO);
    let new_salary = salaries
        .salary_for(employee.new_rank.as_deref())
        .unwrap_or(old_salary);

    let old_share = amount::product("base_salary_raw", &[old_salary, old_days]);
    let new_share = amount::product("base_salary_raw", &[new_salary, new_days]);
    Some(amount::sum(
        "base_salary_raw",
        &[
            amount::quotient("base_salary_raw", old_share, days_in_month),
            amount::quotient("base_salary_raw", new_share, days_in_month),
        ],
    ))
}
