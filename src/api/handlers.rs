//! HTTP request handlers for the payroll ledger API.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::post,
};
use tracing::{info, warn};
use uuid::Uuid;

use super::request::LedgerRequest;
use super::response::{ApiError, ApiErrorResponse, LedgerResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/ledger", post(ledger_handler))
        .with_state(state)
}

/// Handler for POST /ledger.
///
/// Evaluates the inline employees when given, otherwise the employees
/// loaded at startup, optionally filtered to one id.
async fn ledger_handler(
    State(state): State<AppState>,
    payload: Result<Json<LedgerRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing ledger request");

    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => {
            return rejection_response(correlation_id, rejection).into_response();
        }
    };

    let start_time = Instant::now();
    let employees = request
        .employees
        .as_deref()
        .unwrap_or_else(|| state.employees());
    let rows = state
        .engine()
        .run(employees, request.employee_id.as_deref());

    info!(
        correlation_id = %correlation_id,
        inline = request.employees.is_some(),
        rows = rows.len(),
        duration_us = start_time.elapsed().as_micros(),
        "Ledger request completed"
    );

    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        Json(LedgerResponse::new(rows)),
    )
        .into_response()
}

fn rejection_response(correlation_id: Uuid, rejection: JsonRejection) -> ApiErrorResponse {
    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            let body_text = err.body_text();
            warn!(correlation_id = %correlation_id, error = %body_text, "JSON data error");
            ApiError::new("VALIDATION_ERROR", body_text)
        }
        JsonRejection::JsonSyntaxError(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "JSON syntax error");
            ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
        }
        JsonRejection::MissingJsonContentType(_) => {
            ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
        }
        _ => ApiError::malformed_json("Failed to parse request body"),
    };
    ApiErrorResponse::bad_request(error)
}
