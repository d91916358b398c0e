//! Ledger rendering.
//!
//! Turns [`LedgerRow`](crate::models::LedgerRow)s into the comma-separated
//! ledger stream: a header naming every column, one line per employee with
//! amounts rounded to cents, and a closing runtime line.

mod writer;

pub use writer::{
    LEDGER_COLUMNS, LedgerWriter, format_amount, format_row, header_line, runtime_line,
};
