//! CSV export of amortization schedules.
//!
//! Money columns are rounded to cents here. The schedule itself keeps full
//! precision.

use std::io;

use sac_shared::types::format_money;
use thiserror::Error;

use super::types::SimulationResult;

/// Column names of the exported schedule.
pub const CSV_HEADER: [&str; 7] = [
    "installment",
    "amortization",
    "interest",
    "payment",
    "remaining_balance",
    "cumulative_interest",
    "cumulative_amortization",
];

/// Schedule export errors.
#[derive(Debug, Error)]
pub enum ExportError {
    /// Writing a CSV record failed.
    #[error("CSV write failed: {0}")]
    Csv(#[from] csv::Error),

    /// Flushing the underlying writer failed.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The buffered output was not valid UTF-8.
    #[error("Export produced invalid UTF-8: {0}")]
    Encoding(#[from] std::string::FromUtf8Error),
}

/// Writes the installments of `result` as CSV, header first.
///
/// # Errors
///
/// Returns `ExportError` if the writer fails.
pub fn write_schedule_csv<W: io::Write>(
    result: &SimulationResult,
    writer: W,
) -> Result<(), ExportError> {
    let mut wtr = csv::Writer::from_writer(writer);
    wtr.write_record(CSV_HEADER)?;

    for installment in &result.installments {
        wtr.write_record([
            installment.index.to_string(),
            format_money(installment.amortization),
            format_money(installment.interest),
            format_money(installment.payment_amount),
            format_money(installment.remaining_balance),
            format_money(installment.cumulative_interest),
            format_money(installment.cumulative_amortization),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}

/// Renders the schedule as a CSV string.
///
/// # Errors
///
/// Returns `ExportError` if serialization fails.
pub fn schedule_to_csv(result: &SimulationResult) -> Result<String, ExportError> {
    let mut buffer = Vec::new();
    write_schedule_csv(result, &mut buffer)?;
    Ok(String::from_utf8(buffer)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::amortization::calculator::compute;
    use crate::amortization::types::SimulationRequest;
    use rust_decimal_macros::dec;

    #[test]
    fn test_header_and_row_count() {
        let result = compute(&SimulationRequest::new(dec!(1200), dec!(12), 12)).unwrap();
        let csv = schedule_to_csv(&result).unwrap();
        let lines: Vec<&str> = csv.lines().collect();

        assert_eq!(lines.len(), 13);
        assert_eq!(
            lines[0],
            "installment,amortization,interest,payment,remaining_balance,cumulative_interest,cumulative_amortization"
        );
        assert_eq!(lines[1], "1,100.00,12.00,112.00,1100.00,12.00,100.00");
        assert_eq!(lines[12], "12,100.00,1.00,101.00,0.00,78.00,1200.00");
    }

    #[test]
    fn test_money_columns_are_rounded_to_cents() {
        let result = compute(&SimulationRequest::new(dec!(1000), dec!(10), 3)).unwrap();
        let csv = schedule_to_csv(&result).unwrap();
        let first = csv.lines().nth(1).unwrap();

        // 1000 / 3 = 333.333..., interest 1000 * 10 / 1200 = 8.333...
        assert_eq!(first, "1,333.33,8.33,341.67,666.67,8.33,333.33");
        assert_eq!(csv.lines().last().unwrap(), "3,333.33,2.78,336.11,0.00,16.67,1000.00");
    }

    #[test]
    fn test_core_result_is_not_rounded_by_export() {
        let result = compute(&SimulationRequest::new(dec!(1000), dec!(10), 3)).unwrap();
        let before = result.clone();
        schedule_to_csv(&result).unwrap();

        assert_eq!(result, before);
        assert!(result.amortization_amount.scale() > 2);
    }
}
