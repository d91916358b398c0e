//! Configuration and input loading for the payroll ledger engine.
//!
//! The lookup-table document is read into a [`TableDocument`] and typed into
//! [`LookupTables`]; [`DataLoader`] reads all input documents of a run.
//!
//! # Example
//!
//! ```no_run
//! use louvois_ledger::config::DataLoader;
//!
//! let dataset = DataLoader::new("./data").load().unwrap();
//! println!("Probation factor: {}", dataset.tables.probation.probation_factor);
//! ```

mod document;
mod loader;
mod types;

pub use document::TableDocument;
pub use loader::{
    DataLoader, Dataset, EMPLOYEES_DOCUMENT, LOOKUP_TABLES_DOCUMENT, MISSIONS_DOCUMENT,
    RULES_DOCUMENT, UNITS_DOCUMENT, load_document,
};
pub use types::{
    ActingPolicy, BaseSalaryTable, CombineMode, CommuteBand, CommuteBands,
    DEFAULT_DAILY_STANDARD_HOURS, DEFAULT_DAYS_IN_MONTH, DEFAULT_EXCHANGE_RATE,
    DEFAULT_FATIGUE_MULTIPLIER, DEFAULT_PROBATION_FACTOR, DEFAULT_PROBATION_MONTHS,
    DEFAULT_SENIORITY_CAP, DEFAULT_SENIORITY_RATE, DutyRates, FatiguePolicy, HousingPolicy,
    LookupTables, MissionPolicy, ProbationPolicy, SeniorityPolicy,
};
