//! Acting allowance calculation.

use rust_decimal::Decimal;

use super::amount;
use crate::config::ActingPolicy;

/// Calculates the acting allowance: `acting_days × per_day` once the acting
/// days strictly exceed the configured threshold, otherwise nothing.
pub fn calculate_acting_allowance(acting_days: Decimal, policy: &ActingPolicy) -> Decimal {
    if acting_days > policy.threshold_days {
        amount::product("acting_allowance", &[acting_days, policy.per_day])
    } else {
        Decimal::ZERO
    }
}
