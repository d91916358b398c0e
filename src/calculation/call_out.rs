//! Call-back and standby allowances.

use rust_decimal::Decimal;

use super::amount;
use crate::models::Employee;

/// Calculates the call-back allowance: `call_back_count × call_back_flat`
/// when the employee's call-back flag is set, otherwise zero.
pub fn calculate_call_back_allowance(employee: &Employee, call_back_flat: Decimal) -> Decimal {
    if employee.call_back {
        amount::product(
            "call_back_allowance",
            &[employee.call_back_count, call_back_flat],
        )
    } else {
        Decimal::ZERO
    }
}

/// Calculates the standby allowance: `standby_hours × standby_rate`.
///
/// Being called in voids standby pay entirely, whatever the hours.
pub fn calculate_standby_allowance(employee: &Employee, standby_rate: Decimal) -> Decimal {
    if employee.standby_hours > Decimal::ZERO && !employee.called_in {
        amount::product("standby_allowance", &[employee.standby_hours, standby_rate])
    } else {
        Decimal::ZERO
    }
}
