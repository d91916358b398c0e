//! Mutually exclusive allowance selection.
//!
//! Two pairs of allowances compete: the legacy housing allowance against
//! the barracks subsidy, and the commute allowance against the official
//! vehicle allowance. In each pair only the larger is paid.

use rust_decimal::Decimal;

use crate::config::CommuteBands;
use crate::models::Employee;

/// The result of choosing between the commute and vehicle allowances.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransportSelection {
    /// Commute allowance from the distance bands, or the employee's flat
    /// commute allowance when no band applies.
    pub commute_allowance: Decimal,
    /// Larger of the commute allowance and the official vehicle allowance.
    pub selected: Decimal,
}

/// Selects the larger of the employee's housing allowance and barracks
/// subsidy.
///
/// These are per-employee legacy fields, unrelated to the unit-based
/// housing allowance.
pub fn select_housing_allowance(employee: &Employee) -> Decimal {
    employee.housing_allowance.max(employee.barracks_subsidy)
}

/// Determines the commute allowance and selects it or the official vehicle
/// allowance, whichever is larger.
///
/// # Examples
///
/// ```
/// use louvois_ledger::calculation::select_transport_allowance;
/// use louvois_ledger::config::{CommuteBand, CommuteBands};
/// use louvois_ledger::models::Employee;
/// use rust_decimal::Decimal;
///
/// let bands = CommuteBands::new(vec![
///     CommuteBand {
///         max_km: Decimal::from(10),
///         allowance: Decimal::from(50),
///     },
///     CommuteBand {
///         max_km: Decimal::from(30),
///         allowance: Decimal::from(100),
///     },
/// ]);
/// let employee = Employee {
///     commute_km: Some(Decimal::from(25)),
///     commute_allowance: Decimal::from(20),
///     official_vehicle_allowance: Decimal::from(80),
///     ..Default::default()
/// };
///
/// let selection = select_transport_allowance(&employee, &bands);
/// assert_eq!(selection.commute_allowance, Decimal::from(100));
/// assert_eq!(selection.selected, Decimal::from(100));
/// ```
pub fn select_transport_allowance(employee: &Employee, bands: &CommuteBands) -> TransportSelection {
    let commute_allowance = bands
        .lookup(employee.commute_km)
        .unwrap_or(employee.commute_allowance);

    TransportSelection {
        commute_allowance,
        selected: commute_allowance.max(employee.official_vehicle_allowance),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CommuteBand;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn bands() -> CommuteBands {
        CommuteBands::new(vec![
            CommuteBand {
                max_km: dec("10"),
                allowance: dec("50"),
            },
            CommuteBand {
                max_km: dec("30"),
                allowance: dec("100"),
            },
        ])
    }

    fn commuter(km: Option<&str>, flat: &str, vehicle: &str) -> Employee {
        Employee {
            commute_km: km.map(dec),
            commute_allowance: dec(flat),
            official_vehicle_allowance: dec(vehicle),
            ..Default::default()
        }
    }

    #[test]
    fn test_housing_larger_wins() {
        let employee = Employee {
            housing_allowance: dec("300"),
            barracks_subsidy: dec("450"),
            ..Default::default()
        };
        assert_eq!(select_housing_allowance(&employee), dec("450"));
    }

    /// TR-001: band value beats the flat field
    #[test]
    fn test_tr_001_band_selected() {
        let selection = select_transport_allowance(&commuter(Some("25"), "70", "0"), &bands());
        assert_eq!(selection.commute_allowance, dec("100"));
        assert_eq!(selection.selected, dec("100"));
    }

    /// TR-002: zero, negative or missing distance falls back to the flat field
    #[test]
    fn test_tr_002_flat_fallback() {
        for km in [Some("0"), Some("-3"), None] {
            let selection = select_transport_allowance(&commuter(km, "70", "0"), &bands());
            assert_eq!(selection.commute_allowance, dec("70"));
        }
    }

    /// TR-003: distance beyond every band falls back to the flat field
    #[test]
    fn test_tr_003_beyond_bands() {
        let selection = select_transport_allowance(&commuter(Some("45"), "70", "0"), &bands());
        assert_eq!(selection.commute_allowance, dec("70"));
    }

    /// TR-004: official vehicle allowance wins when larger
    #[test]
    fn test_tr_004_vehicle_wins() {
        let selection = select_transport_allowance(&commuter(Some("5"), "0", "120"), &bands());
        assert_eq!(selection.commute_allowance, dec("50"));
        assert_eq!(selection.selected, dec("120"));
    }
}
