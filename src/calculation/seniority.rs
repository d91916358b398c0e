//! Seniority allowance calculation.

use rust_decimal::Decimal;

use super::amount;
use crate::config::SeniorityPolicy;

/// Calculates the seniority allowance.
///
/// The allowance is `seniority_years × base_salary × seniority_rate`, capped
/// at `seniority_cap`. It is zero when `seniority_years` is not positive.
/// `base_salary` is the post-probation salary.
///
/// # Examples
///
/// ```
/// use louvois_ledger::calculation::calculate_seniority_allowance;
/// use louvois_ledger::config::SeniorityPolicy;
/// use rust_decimal::Decimal;
///
/// let policy = SeniorityPolicy::default(); // 2% per year, capped at 800
/// let allowance = calculate_seniority_allowance(Decimal::from(5), Decimal::from(2000), &policy);
/// assert_eq!(allowance, Decimal::from(200));
/// ```
pub fn calculate_seniority_allowance(
    seniority_years: Decimal,
    base_salary: Decimal,
    policy: &SeniorityPolicy,
) -> Decimal {
    if seniority_years <= Decimal::ZERO {
        return Decimal::ZERO;
    }
    let allowance = amount::product(
        "seniority_allowance",
        &[base_salary, policy.seniority_rate, seniority_years],
    );
    allowance.min(policy.seniority_cap)
}
