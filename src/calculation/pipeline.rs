//! The ordered allowance pipeline.
//!
//! Each rule family is a pure function in its own module. This module runs
//! them in dependency order for one employee and assembles the results into
//! a [`LedgerRow`]:
//!
//! 1. base salary (rank lookup and promotion pro-ration)
//! 2. probation reduction
//! 3. seniority allowance, on the post-probation salary
//! 4. acting allowance
//! 5. legacy housing/barracks selection
//! 6. commute/vehicle selection
//! 7. duty-hour allowances
//! 8. call-back and standby
//! 9. mission totals, using the post-probation salary for hazard pay
//! 10. training allowance, suppressed by hazard exposure
//! 11. unit housing, barracks and meals
//! 12. fatigue scaling of the duty-hour allowances
//! 13. signed total

use rust_decimal::Decimal;
use tracing::debug;

use super::acting::calculate_acting_allowance;
use super::base_salary::calculate_base_salary;
use super::call_out::{calculate_call_back_allowance, calculate_standby_allowance};
use super::duty_hours::{calculate_duty_hour_allowances, fatigue_multiplier};
use super::exclusive::{select_housing_allowance, select_transport_allowance};
use super::missions::aggregate_missions;
use super::seniority::calculate_seniority_allowance;
use super::training::calculate_training_allowance;
use super::unit_housing::calculate_unit_housing;
use crate::config::LookupTables;
use crate::models::{Employee, LedgerRow, Mission, Unit};

/// Everything the pipeline reads for one employee.
#[derive(Debug, Clone, Copy)]
pub struct EmployeeContext<'a> {
    /// The employee being paid.
    pub employee: &'a Employee,
    /// The employee's unit, when the reference resolves.
    pub unit: Option<&'a Unit>,
    /// All mission records; the aggregator keeps those of the employee's unit.
    pub missions: &'a [Mission],
    /// The lookup tables for the run.
    pub tables: &'a LookupTables,
}

/// Evaluates every rule for one employee and returns the complete row.
///
/// Never fails: missing or malformed inputs have already been defaulted,
/// and each rule treats them as "does not apply".
///
/// # Examples
///
/// ```
/// use louvois_ledger::calculation::{evaluate_employee, EmployeeContext};
/// use louvois_ledger::config::{BaseSalaryTable, LookupTables};
/// use louvois_ledger::models::Employee;
/// use rust_decimal::Decimal;
/// use std::collections::HashMap;
///
/// let tables = LookupTables {
///     base_salary: BaseSalaryTable::new(HashMap::from([
///         ("Private".to_string(), Decimal::from(1000)),
///     ])),
///     ..Default::default()
/// };
/// let employee = Employee {
///     id: Some("E001".to_string()),
///     rank: Some("Private".to_string()),
///     months_in_service: Decimal::from(3),
///     ..Default::default()
/// };
///
/// let row = evaluate_employee(&EmployeeContext {
///     employee: &employee,
///     unit: None,
///     missions: &[],
///     tables: &tables,
/// });
/// assert_eq!(row.base_salary, Decimal::from(800));
/// assert_eq!(row.total_base, Decimal::from(800));
/// ```
pub fn evaluate_employee(ctx: &EmployeeContext<'_>) -> LedgerRow {
    let employee = ctx.employee;
    let tables = ctx.tables;

    let base = calculate_base_salary(
        employee,
        &tables.base_salary,
        tables.days_in_month,
        &tables.probation,
    );
    let seniority =
        calculate_seniority_allowance(employee.seniority_years, base.salary, &tables.seniority);
    let acting = calculate_acting_allowance(employee.acting_days, &tables.acting);
    let selected_housing = select_housing_allowance(employee);
    let transport = select_transport_allowance(employee, &tables.commute_bands);
    let duty = calculate_duty_hour_allowances(employee, &tables.duty);
    let call_back = calculate_call_back_allowance(employee, tables.duty.call_back_flat);
    let standby = calculate_standby_allowance(employee, tables.duty.standby_rate);
    let missions = aggregate_missions(
        employee.unit.as_deref(),
        ctx.missions,
        base.salary,
        &tables.missions,
    );
    let training = calculate_training_allowance(
        employee.training_days,
        missions.hazard_exposure,
        tables.duty.training_day_allowance,
    );
    let unit_housing = calculate_unit_housing(employee, ctx.unit, &tables.housing);
    let multiplier = fatigue_multiplier(employee.streak_days, &tables.fatigue);
    let duty = duty.scaled(multiplier);

    debug!(
        employee_id = employee.id_str(),
        base_salary = %base.salary,
        prorated = base.prorated,
        on_probation = base.on_probation,
        hazard_exposure = missions.hazard_exposure,
        fatigue_multiplier = %multiplier,
        "Evaluated employee"
    );

    let mut row = LedgerRow {
        id: employee.id.clone(),
        name: employee.name.clone(),
        rank: employee.rank.clone(),
        promotion_date: employee.promotion_date.clone(),
        new_rank: employee.new_rank.clone(),
        months_in_service: employee.months_in_service,
        base_salary_raw: base.raw,
        base_salary: base.salary,
        seniority_allowance: seniority,
        acting_allowance: acting,
        commute_allowance: transport.commute_allowance,
        selected_housing_allowance: selected_housing,
        selected_transport_allowance: transport.selected,
        night_allowance: duty.night,
        weekend_allowance: duty.weekend,
        holiday_allowance: duty.holiday,
        overtime_allowance: duty.overtime,
        call_back_allowance: call_back,
        standby_allowance: standby,
        training_allowance: training,
        per_diem_domestic: missions.per_diem_domestic,
        per_diem_international: missions.per_diem_international,
        hazard_allowance: missions.hazard_allowance,
        combat_allowance: missions.combat_allowance,
        sea_duty_allowance: missions.sea_duty_allowance,
        joint_mission_bonus: missions.joint_mission_bonus,
        per_diem_recovery: missions.per_diem_recovery,
        cancel_compensation: missions.cancel_compensation,
        housing_allowance: unit_housing.housing_allowance,
        barracks_deduction: unit_housing.barracks_deduction,
        meal_deduction: unit_housing.meal_deduction,
        special_meal_allowance: unit_housing.special_meal_allowance,
        fatigue_multiplier: multiplier,
        total_base: Decimal::ZERO,
    };
    row.total_base = row.signed_total();
    row
}
