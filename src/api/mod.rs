//! HTTP API for the payroll ledger engine.
//!
//! This module exposes the ledger as JSON over `POST /ledger`, for callers
//! that want rows rather than the comma-separated stream.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::LedgerRequest;
pub use response::{ApiError, ApiErrorResponse, LedgerResponse};
pub use state::AppState;
