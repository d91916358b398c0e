//! Louvois payroll ledger engine.
//!
//! This crate computes a military payroll ledger: for each employee it
//! evaluates base pay, seniority, duty-hour allowances, mission per-diems,
//! hazard and combat bonuses, housing adjustments and deductions against a
//! lookup-table document, and produces one ledger row per employee.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod engine;
pub mod error;
pub mod ledger;
pub mod lenient;
pub mod models;
pub mod reformat;
