//! Input document loading.
//!
//! This module provides the [`DataLoader`] type for reading the five input
//! documents of a payroll run from a data directory.

use std::fs;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{info, warn};

use crate::error::{EngineError, EngineResult};
use crate::models::{Employee, Mission, Rank, Rule, RuleSet, Unit};

use super::document::TableDocument;
use super::types::LookupTables;

/// Document stem of the employee list.
pub const EMPLOYEES_DOCUMENT: &str = "employees";
/// Document stem of the rule catalogue.
pub const RULES_DOCUMENT: &str = "rules";
/// Document stem of the lookup tables.
pub const LOOKUP_TABLES_DOCUMENT: &str = "lookup_table";
/// Document stem of the mission list.
pub const MISSIONS_DOCUMENT: &str = "missions";
/// Document stem of the unit list.
pub const UNITS_DOCUMENT: &str = "units";

/// Everything a payroll run reads.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    /// Employees, in input order.
    pub employees: Vec<Employee>,
    /// Rule catalogue.
    pub rules: RuleSet,
    /// Typed lookup tables.
    pub tables: LookupTables,
    /// Missions, in input order.
    pub missions: Vec<Mission>,
    /// Units, in input order.
    pub units: Vec<Unit>,
}

/// Loads payroll input documents.
///
/// # Directory Structure
///
/// ```text
/// data/
/// ├── employees.json     # Employee records
/// ├── rules.json         # Rule catalogue (must contain R001)
/// ├── lookup_table.json  # Lookup tables keyed by rule domain
/// ├── missions.json      # Mission records
/// └── units.json         # Unit records
/// ```
///
/// Each document may instead be a `.yaml`/`.yml` file with the same stem;
/// the JSON file is preferred when both exist.
///
/// # Example
///
/// ```no_run
/// use louvois_ledger::config::DataLoader;
///
/// let dataset = DataLoader::new("./data").load()?;
/// println!("{} employees", dataset.employees.len());
/// # Ok::<(), louvois_ledger::error::EngineError>(())
/// ```
#[derive(Debug, Clone)]
pub struct DataLoader {
    root: PathBuf,
}

impl DataLoader {
    /// Creates a loader reading from `root`.
    pub fn new<P: AsRef<Path>>(root: P) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    /// Loads all five documents.
    ///
    /// # Returns
    ///
    /// Returns the [`Dataset`] on success, or an error if any document is
    /// missing or cannot be parsed. The presence of the gating rule is not
    /// checked here.
    pub fn load(&self) -> EngineResult<Dataset> {
        let employees = self.load_employees()?;
        let rules = self.load_rules()?;
        let tables = self.load_tables()?;
        let missions = self.load_missions()?;
        let units = self.load_units()?;

        info!(
            employees = employees.len(),
            rules = rules.len(),
            missions = missions.len(),
            units = units.len(),
            "Loaded payroll documents"
        );

        Ok(Dataset {
            employees,
            rules,
            tables,
            missions,
            units,
        })
    }

    /// Loads the employee list.
    pub fn load_employees(&self) -> EngineResult<Vec<Employee>> {
        self.load_records(EMPLOYEES_DOCUMENT)
    }

    /// Loads the rule catalogue.
    pub fn load_rules(&self) -> EngineResult<RuleSet> {
        let path = self.resolve(RULES_DOCUMENT)?;
        let rules: Vec<Rule> = load_document(&path)?;
        Ok(RuleSet::new(rules, path.display().to_string()))
    }

    /// Loads and types the lookup tables.
    pub fn load_tables(&self) -> EngineResult<LookupTables> {
        let path = self.resolve(LOOKUP_TABLES_DOCUMENT)?;
        let raw: Value = load_document(&path)?;
        let tables = LookupTables::from_document(&TableDocument::new(raw));

        for rank in Rank::ALL {
            if tables.base_salary.salary_for(Some(rank.as_str())).is_none() {
                warn!(rank = %rank, "Rank has no base salary configured");
            }
        }

        Ok(tables)
    }

    /// Loads the mission list.
    pub fn load_missions(&self) -> EngineResult<Vec<Mission>> {
        self.load_records(MISSIONS_DOCUMENT)
    }

    /// Loads the unit list.
    pub fn load_units(&self) -> EngineResult<Vec<Unit>> {
        self.load_records(UNITS_DOCUMENT)
    }

    fn load_records<T: DeserializeOwned>(&self, stem: &str) -> EngineResult<Vec<T>> {
        let path = self.resolve(stem)?;
        load_document(&path)
    }

    /// Finds the file for a document stem, preferring JSON over YAML.
    fn resolve(&self, stem: &str) -> EngineResult<PathBuf> {
        ["json", "yaml", "yml"]
            .iter()
            .map(|ext| self.root.join(format!("{stem}.{ext}")))
            .find(|path| path.is_file())
            .ok_or_else(|| EngineError::ConfigNotFound {
                path: self.root.join(format!("{stem}.json")).display().to_string(),
            })
    }
}

/// Reads and parses one document. The format follows the file extension:
/// `.yaml`/`.yml` as YAML, anything else as JSON.
pub fn load_document<T: DeserializeOwned>(path: &Path) -> EngineResult<T> {
    let path_str = path.display().to_string();

    let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
        path: path_str.clone(),
    })?;

    let is_yaml = path
        .extension()
        .is_some_and(|ext| ext == "yaml" || ext == "yml");

    if is_yaml {
        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    } else {
        serde_json::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }
}
