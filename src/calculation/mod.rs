//! Calculation logic for the payroll ledger engine.
//!
//! This module contains one function per rule family: base salary with
//! promotion pro-ration and probation, seniority allowance, acting
//! allowance, the legacy housing and transport selections, duty-hour
//! allowances with the fatigue multiplier, call-back and standby pay,
//! mission aggregation, training allowance and unit housing. The
//! [`evaluate_employee`] pipeline runs them in dependency order.

mod acting;
pub(crate) mod amount;
mod base_salary;
mod call_out;
mod duty_hours;
mod exclusive;
mod missions;
mod pipeline;
mod seniority;
mod training;
mod unit_housing;

pub use acting::calculate_acting_allowance;
pub use base_salary::{BaseSalaryResult, calculate_base_salary};
pub use call_out::{calculate_call_back_allowance, calculate_standby_allowance};
pub use duty_hours::{DutyHourAllowances, calculate_duty_hour_allowances, fatigue_multiplier};
pub use exclusive::{TransportSelection, select_housing_allowance, select_transport_allowance};
pub use missions::{MissionTotals, aggregate_missions};
pub use pipeline::{EmployeeContext, evaluate_employee};
pub use seniority::calculate_seniority_allowance;
pub use training::calculate_training_allowance;
pub use unit_housing::{UnitHousingResult, calculate_unit_housing};
