//! Overflow-checked arithmetic for rule amounts.
//!
//! `Decimal` operators panic once a result leaves the representable range.
//! Every rule goes through these helpers instead, so an out-of-range input
//! zeroes the affected amount and logs a warning rather than aborting the
//! run.

use rust_decimal::Decimal;
use tracing::warn;

/// Multiplies `factors` together, or returns zero when the product overflows.
pub(crate) fn product(rule: &str, factors: &[Decimal]) -> Decimal {
    factors
        .iter()
        .try_fold(Decimal::ONE, |acc, factor| acc.checked_mul(*factor))
        .unwrap_or_else(|| overflowed(rule))
}

/// Adds `terms` together, or returns zero when the sum overflows.
pub(crate) fn sum(rule: &str, terms: &[Decimal]) -> Decimal {
    terms
        .iter()
        .try_fold(Decimal::ZERO, |acc, term| acc.checked_add(*term))
        .unwrap_or_else(|| overflowed(rule))
}

/// Subtracts `rhs` from `lhs`, or returns zero when the difference overflows.
pub(crate) fn difference(rule: &str, lhs: Decimal, rhs: Decimal) -> Decimal {
    lhs.checked_sub(rhs).unwrap_or_else(|| overflowed(rule))
}

/// Divides `numerator` by `denominator`, or returns zero when the quotient
/// overflows or the denominator is zero.
pub(crate) fn quotient(rule: &str, numerator: Decimal, denominator: Decimal) -> Decimal {
    numerator
        .checked_div(denominator)
        .unwrap_or_else(|| overflowed(rule))
}

fn overflowed(rule: &str) -> Decimal {
    warn!(rule, "amount out of range, using 0");
    Decimal::ZERO
}
