//! Ledger repository for CSV storage
//!
//! Manages the expense records in contas.csv. Each mutation reads the whole
//! file, changes the in-memory list, and rewrites the file atomically. There
//! is no cross-process locking: two concurrent writers race, and the last
//! rename wins.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::SplitError;
use crate::models::{Expense, Money, Month};

use super::file_io::{read_csv, write_csv_atomic};

/// Column headers of the ledger file
pub const LEDGER_HEADERS: [&str; 3] = ["Data", "Conta", "Valor"];

/// One row of contas.csv as text
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ExpenseRow {
    #[serde(rename = "Data")]
    month: String,
    #[serde(rename = "Conta")]
    category: String,
    #[serde(rename = "Valor")]
    amount: String,
}

impl ExpenseRow {
    fn from_expense(expense: &Expense) -> Self {
        Self {
            month: expense.month.to_string(),
            category: expense.category.clone(),
            amount: expense.amount.to_decimal_string(),
        }
    }

    fn into_expense(self, row_number: usize) -> Result<Expense, SplitError> {
        let month = Month::parse(&self.month).map_err(|e| {
            SplitError::Storage(format!("Ledger row {}: {}", row_number, e))
        })?;
        let amount = Money::parse(&self.amount).map_err(|e| {
            SplitError::Storage(format!("Ledger row {}: {}", row_number, e))
        })?;
        Ok(Expense::new(month, self.category, amount))
    }
}

/// Repository for ledger persistence
pub struct LedgerRepository {
    path: PathBuf,
}

impl LedgerRepository {
    /// Create a new ledger repository
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }

    /// Load every expense in file order; empty if the file doesn't exist
    pub fn load_all(&self) -> Result<Vec<Expense>, SplitError> {
        let rows: Vec<ExpenseRow> = read_csv(&self.path)?.unwrap_or_default();

        rows.into_iter()
            .enumerate()
            .map(|(i, row)| row.into_expense(i + 1))
            .collect()
    }

    /// Persist a complete ledger, replacing the file
    pub fn save(&self, expenses: &[Expense]) -> Result<(), SplitError> {
        let rows: Vec<ExpenseRow> = expenses.iter().map(ExpenseRow::from_expense).collect();
        write_csv_atomic(&self.path, &LEDGER_HEADERS, &rows)
    }

    /// Append one expense, creating the file if absent
    pub fn append(&self, expense: Expense) -> Result<(), SplitError> {
        let mut expenses = self.load_all()?;
        expenses.push(expense);
        self.save(&expenses)?;
        tracing::debug!(path = %self.path.display(), records = expenses.len(), "ledger appended");
        Ok(())
    }

    /// Remove the first expense equal to `key`
    ///
    /// Returns the removed record, or `None` (leaving the file untouched) if
    /// nothing matched.
    pub fn delete(&self, key: &Expense) -> Result<Option<Expense>, SplitError> {
        let mut expenses = self.load_all()?;

        let Some(index) = expenses
            .iter()
            .position(|e| e.matches(key.month, &key.category, key.amount))
        else {
            return Ok(None);
        };

        let removed = expenses.remove(index);
        self.save(&expenses)?;
        Ok(Some(removed))
    }
}
