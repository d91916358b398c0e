use std::io::{self, Write};
use std::time::Duration;

use rust_decimal::{Decimal, RoundingStrategy};

use crate::error::{EngineError, EngineResult};
use crate::models::LedgerRow;

/// Ledger columns in output order.
pub const LEDGER_COLUMNS: [&str; 34] = [
    "id",
    "name",
    "rank",
    "promotion_date",
    "new_rank",
    "months_in_service",
    "base_salary_raw",
    "base_salary",
    "seniority_allowance",
    "acting_allowance",
    "commute_allowance",
    "selected_housing_allowance",
    "selected_transport_allowance",
    "night_allowance",
    "weekend_allowance",
    "holiday_allowance",
    "overtime_allowance",
    "call_back_allowance",
    "standby_allowance",
    "training_allowance",
    "per_diem_domestic",
    "per_diem_international",
    "hazard_allowance",
    "combat_allowance",
    "sea_duty_allowance",
    "joint_mission_bonus",
    "per_diem_recovery",
    "cancel_compensation",
    "housing_allowance",
    "barracks_deduction",
    "meal_deduction",
    "special_meal_allowance",
    "fatigue_multiplier",
    "total_base",
];

/// Formats an amount with exactly two decimal places, rounding half away
/// from zero.
///
/// # Examples
///
/// ```
/// use louvois_ledger::ledger::format_amount;
/// use rust_decimal::Decimal;
///
/// assert_eq!(format_amount(Decimal::from(800)), "800.00");
/// assert_eq!(format_amount(Decimal::new(12345, 3)), "12.35");
/// assert_eq!(format_amount(Decimal::new(-5, 3)), "-0.01");
/// ```
pub fn format_amount(value: Decimal) -> String {
    let rounded = value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    format!("{:.2}", rounded)
}

/// Returns the header line.
pub fn header_line() -> String {
    LEDGER_COLUMNS.join(",")
}

/// Returns the closing runtime line, e.g. `runtime_seconds=0.0123`.
pub fn runtime_line(elapsed: Duration) -> String {
    format!("runtime_seconds={:.4}", elapsed.as_secs_f64())
}

/// Renders one row in [`LEDGER_COLUMNS`] order.
///
/// Missing identity fields render as empty fields and months in service
/// keeps its own precision; every other column is an amount.
pub fn format_row(row: &LedgerRow) -> String {
    let text = |field: &Option<String>| field.clone().unwrap_or_default();
    let amounts = [
        row.base_salary_raw,
        row.base_salary,
        row.seniority_allowance,
        row.acting_allowance,
        row.commute_allowance,
        row.selected_housing_allowance,
        row.selected_transport_allowance,
        row.night_allowance,
        row.weekend_allowance,
        row.holiday_allowance,
        row.overtime_allowance,
        row.call_back_allowance,
        row.standby_allowance,
        row.training_allowance,
        row.per_diem_domestic,
        row.per_diem_international,
        row.hazard_allowance,
        row.combat_allowance,
        row.sea_duty_allowance,
        row.joint_mission_bonus,
        row.per_diem_recovery,
        row.cancel_compensation,
        row.housing_allowance,
        row.barracks_deduction,
        row.meal_deduction,
        row.special_meal_allowance,
        row.fatigue_multiplier,
        row.total_base,
    ];

    let mut fields = vec![
        text(&row.id),
        text(&row.name),
        text(&row.rank),
        text(&row.promotion_date),
        text(&row.new_rank),
        row.months_in_service.normalize().to_string(),
    ];
    fields.extend(amounts.into_iter().map(format_amount));
    fields.join(",")
}

/// Writes the ledger stream to any [`Write`] sink.
///
/// # Example
///
/// ```
/// use louvois_ledger::ledger::LedgerWriter;
/// use louvois_ledger::models::LedgerRow;
/// use rust_decimal::Decimal;
///
/// let mut writer = LedgerWriter::new(Vec::new());
/// writer.write_header()?;
/// writer.write_row(&LedgerRow {
///     id: Some("E001".to_string()),
///     total_base: Decimal::from(800),
///     ..Default::default()
/// })?;
///
/// let output = String::from_utf8(writer.into_inner()?).unwrap();
/// assert!(output.starts_with("id,name,rank,"));
/// assert!(output.trim_end().ends_with(",800.00"));
/// # Ok::<(), louvois_ledger::error::EngineError>(())
/// ```
#[derive(Debug)]
pub struct LedgerWriter<W: Write> {
    out: W,
}

impl<W: Write> LedgerWriter<W> {
    /// Wraps a sink.
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Writes the header line.
    pub fn write_header(&mut self) -> EngineResult<()> {
        writeln!(self.out, "{}", header_line()).map_err(output_error)
    }

    /// Writes one row.
    pub fn write_row(&mut self, row: &LedgerRow) -> EngineResult<()> {
        writeln!(self.out, "{}", format_row(row)).map_err(output_error)
    }

    /// Writes every row in order.
    pub fn write_rows<'a>(
        &mut self,
        rows: impl IntoIterator<Item = &'a LedgerRow>,
    ) -> EngineResult<()> {
        for row in rows {
            self.write_row(row)?;
        }
        Ok(())
    }

    /// Writes a free-form line in place of the ledger, such as the
    /// missing-rule message.
    pub fn write_message(&mut self, message: &str) -> EngineResult<()> {
        writeln!(self.out, "{}", message).map_err(output_error)
    }

    /// Writes the runtime line and flushes.
    pub fn write_runtime(&mut self, elapsed: Duration) -> EngineResult<()> {
        writeln!(self.out, "{}", runtime_line(elapsed)).map_err(output_error)?;
        self.out.flush().map_err(output_error)
    }

    /// Flushes and returns the sink.
    pub fn into_inner(mut self) -> EngineResult<W> {
        self.out.flush().map_err(output_error)?;
        Ok(self.out)
    }
}

fn output_error(error: io::Error) -> EngineError {
    EngineError::Output {
        message: error.to_string(),
    }
}
