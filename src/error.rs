//! Error types for the payroll ledger engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate.
//! Only whole-run failures are represented here: missing or unreadable input
//! documents, the absent gating rule, and write or server failures. Problems
//! inside a single employee record never surface as errors; they are absorbed
//! by the tolerant defaulting in [`crate::lenient`].

use thiserror::Error;

/// The main error type for the payroll ledger engine.
///
/// # Example
///
/// ```
/// use louvois_ledger::error::EngineError;
///
/// let error = EngineError::RuleNotFound {
///     rule_id: "R001".to_string(),
///     path: "data/rules.json".to_string(),
/// };
/// assert_eq!(error.to_string(), "R001 not found in data/rules.json");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// An input document was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// An input document could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// A rule required to run the ledger is missing from the rule document.
    #[error("{rule_id} not found in {path}")]
    RuleNotFound {
        /// The identifier of the missing rule.
        rule_id: String,
        /// The rule document that was searched.
        path: String,
    },

    /// Writing the ledger output failed.
    #[error("Failed to write ledger output: {message}")]
    Output {
        /// A description of the write failure.
        message: String,
    },

    /// Writing a file other than the ledger stream failed.
    #[error("Failed to write '{path}': {message}")]
    Write {
        /// The path being written.
        path: String,
        /// A description of the write failure.
        message: String,
    },

    /// The HTTP server could not start or stopped with an error.
    #[error("HTTP server on {addr} failed: {message}")]
    Server {
        /// The listen address.
        addr: String,
        /// A description of the failure.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
