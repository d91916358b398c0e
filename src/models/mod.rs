//! Core data models for the payroll ledger engine.
//!
//! Input records ([`Employee`], [`Unit`], [`Mission`], [`Rule`]) and the
//! computed [`LedgerRow`].

mod employee;
mod ledger_row;
mod mission;
mod rule;
mod unit;

pub use employee::{Branch, Employee, Rank};
pub use ledger_row::LedgerRow;
pub use mission::Mission;
pub use rule::{GATING_RULE_ID, Rule, RuleSet};
pub use unit::{Unit, UnitIndex};
