//! Application state for the payroll ledger API.

use std::sync::Arc;

use crate::engine::PayrollEngine;
use crate::models::Employee;

/// Shared application state.
///
/// Holds the engine built from the data directory at startup and the
/// employee list loaded with it. Both are read-only for the server's
/// lifetime.
#[derive(Clone)]
pub struct AppState {
    engine: Arc<PayrollEngine>,
    employees: Arc<Vec<Employee>>,
}

impl AppState {
    /// Creates the state from an engine and the default employee list.
    pub fn new(engine: PayrollEngine, employees: Vec<Employee>) -> Self {
        Self {
            engine: Arc::new(engine),
            employees: Arc::new(employees),
        }
    }

    /// Returns the engine.
    pub fn engine(&self) -> &PayrollEngine {
        &self.engine
    }

    /// Returns the employees loaded at startup.
    pub fn employees(&self) -> &[Employee] {
        &self.employees
    }
}
