//! CSV Export functionality
//!
//! Writes the ledger with the same columns as contas.csv, so an export can
//! be dropped back in as a data file.

use std::io::Write;

use crate::error::{SplitError, SplitResult};
use crate::storage::ledger::LEDGER_HEADERS;
use crate::storage::Storage;

/// Export all expenses to CSV
pub fn export_ledger_csv<W: Write>(storage: &Storage, writer: W) -> SplitResult<usize> {
    let expenses = storage.ledger.load_all()?;
    let mut csv_writer = ::csv::Writer::from_writer(writer);

    csv_writer.write_record(LEDGER_HEADERS)?;
    for expense in &expenses {
        csv_writer.write_record([
            expense.month.to_string(),
            expense.category.clone(),
            expense.amount.to_decimal_string(),
        ])?;
    }
    csv_writer
        .flush()
        .map_err(|e| SplitError::Export(e.to_string()))?;

    Ok(expenses.len())
}
