//! The payroll engine.
//!
//! [`PayrollEngine`] owns everything that is fixed for a run (lookup tables,
//! the unit index and the mission list) and evaluates employees against it.

use tracing::{info, warn};

use crate::calculation::{EmployeeContext, evaluate_employee};
use crate::config::{Dataset, LookupTables};
use crate::error::EngineResult;
use crate::models::{Employee, GATING_RULE_ID, LedgerRow, Mission, Unit, UnitIndex};

/// Evaluates employees against a fixed set of tables, units and missions.
///
/// The unit index is built once on construction; evaluation never mutates
/// the engine, so one engine can serve any number of runs.
///
/// # Example
///
/// ```
/// use louvois_ledger::config::{BaseSalaryTable, LookupTables};
/// use louvois_ledger::engine::PayrollEngine;
/// use louvois_ledger::models::Employee;
/// use rust_decimal::Decimal;
/// use std::collections::HashMap;
///
/// let tables = LookupTables {
///     base_salary: BaseSalaryTable::new(HashMap::from([
///         ("Captain".to_string(), Decimal::from(3000)),
///     ])),
///     ..Default::default()
/// };
/// let engine = PayrollEngine::new(tables, Vec::new(), Vec::new());
///
/// let employees = vec![
///     Employee {
///         id: Some("E001".to_string()),
///         rank: Some("Captain".to_string()),
///         months_in_service: Decimal::from(60),
///         ..Default::default()
///     },
///     Employee {
///         id: Some("E002".to_string()),
///         ..Default::default()
///     },
/// ];
///
/// let rows = engine.run(&employees, Some("E001"));
/// assert_eq!(rows.len(), 1);
/// assert_eq!(rows[0].total_base, Decimal::from(3000));
/// ```
#[derive(Debug, Clone)]
pub struct PayrollEngine {
    tables: LookupTables,
    units: UnitIndex,
    missions: Vec<Mission>,
}

impl PayrollEngine {
    /// Creates an engine, indexing `units` by id.
    pub fn new(tables: LookupTables, units: Vec<Unit>, missions: Vec<Mission>) -> Self {
        Self {
            tables,
            units: UnitIndex::new(units),
            missions,
        }
    }

    /// Creates an engine from a loaded dataset.
    ///
    /// Fails with [`crate::error::EngineError::RuleNotFound`] when the rule
    /// catalogue lacks the gating rule; no employee is evaluated in that case.
    pub fn from_dataset(dataset: &Dataset) -> EngineResult<Self> {
        let gate = dataset.rules.require(GATING_RULE_ID)?;
        info!(
            rule_id = GATING_RULE_ID,
            rule_name = gate.name.as_deref().unwrap_or_default(),
            "Gating rule present"
        );
        Ok(Self::new(
            dataset.tables.clone(),
            dataset.units.clone(),
            dataset.missions.clone(),
        ))
    }

    /// Evaluates a single employee.
    pub fn evaluate(&self, employee: &Employee) -> LedgerRow {
        let unit = self.units.get(employee.unit.as_deref());
        if unit.is_none() {
            if let Some(reference) = employee.unit.as_deref() {
                warn!(
                    employee_id = employee.id_str(),
                    unit = reference,
                    "Unit reference not found; unit terms skipped"
                );
            }
        }

        evaluate_employee(&EmployeeContext {
            employee,
            unit,
            missions: &self.missions,
            tables: &self.tables,
        })
    }

    /// Evaluates `employees` in input order.
    ///
    /// With a filter, only employees whose id equals it are evaluated; a
    /// filter matching nobody yields no rows.
    pub fn run(&self, employees: &[Employee], filter: Option<&str>) -> Vec<LedgerRow> {
        let rows: Vec<LedgerRow> = employees
            .iter()
            .filter(|employee| filter.is_none_or(|id| employee.id.as_deref() == Some(id)))
            .map(|employee| self.evaluate(employee))
            .collect();

        info!(
            employees = employees.len(),
            rows = rows.len(),
            filter = filter.unwrap_or_default(),
            "Ledger run complete"
        );
        rows
    }
}
