//! Response types for the payroll ledger API.
//!
//! This module defines the ledger response body and the error response
//! structures.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

use crate::ledger::LEDGER_COLUMNS;
use crate::models::LedgerRow;

/// Response body for the `/ledger` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LedgerResponse {
    /// Column names in ledger order.
    pub columns: Vec<String>,
    /// One row per evaluated employee, in input order. Amounts are unrounded.
    pub rows: Vec<LedgerRow>,
}

impl LedgerResponse {
    /// Wraps computed rows with the column list.
    pub fn new(rows: Vec<LedgerRow>) -> Self {
        Self {
            columns: LEDGER_COLUMNS.iter().map(|c| c.to_string()).collect(),
            rows,
        }
    }
}

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
        }
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }
}

/// API error with HTTP status code.
#[derive(Debug)]
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl ApiErrorResponse {
    /// A 400 response carrying `error`.
    pub fn bad_request(error: ApiError) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            error,
        }
    }
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}
