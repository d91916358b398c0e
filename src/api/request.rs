//! Request types for the payroll ledger API.

use serde::{Deserialize, Serialize};

use crate::models::Employee;

/// Request body for the `/ledger` endpoint.
///
/// Both fields are optional; an empty object returns the ledger for every
/// employee loaded at startup.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LedgerRequest {
    /// Restricts the ledger to the employee with this id.
    #[serde(default)]
    pub employee_id: Option<String>,
    /// Employees to evaluate instead of the loaded list.
    #[serde(default)]
    pub employees: Option<Vec<Employee>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_request() {
        let request: LedgerRequest = serde_json::from_str("{}").unwrap();
        assert!(request.employee_id.is_none());
        assert!(request.employees.is_none());
    }

    #[test]
    fn test_inline_employees_are_read_leniently() {
        let json = r#"{
            "employee_id": "E001",
            "employees": [{"id": "E001", "rank": "Private", "night_hours": "n/a"}]
        }"#;
        let request: LedgerRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.employee_id.as_deref(), Some("E001"));
        let employees = request.employees.unwrap();
        assert_eq!(employees.len(), 1);
        assert_eq!(employees[0].night_hours, rust_decimal::Decimal::ZERO);
    }
}
