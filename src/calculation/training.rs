//! Training day allowance.

use rust_decimal::Decimal;

use super::amount;

/// Calculates the training allowance: `training_days × training_day_allowance`.
///
/// Any hazard-zone mission in the period suppresses the allowance
/// completely.
///
/// # Examples
///
/// ```
/// use louvois_ledger::calculation::calculate_training_allowance;
/// use rust_decimal::Decimal;
///
/// let rate = Decimal::from(50);
/// assert_eq!(calculate_training_allowance(Decimal::from(4), false, rate), Decimal::from(200));
/// assert_eq!(calculate_training_allowance(Decimal::from(4), true, rate), Decimal::ZERO);
/// ```
pub fn calculate_training_allowance(
    training_days: Decimal,
    hazard_exposure: bool,
    training_day_allowance: Decimal,
) -> Decimal {
    if training_days > Decimal::ZERO && !hazard_exposure {
        amount::product(
            "training_allowance",
            &[training_days, training_day_allowance],
        )
    } else {
        Decimal::ZERO
    }
}
