//! JSON Export functionality
//!
//! Exports roster, ledger and derived statistics to JSON with schema
//! versioning. Amounts are integer cents.

use std::io::Write;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::error::{SplitError, SplitResult};
use crate::models::{Expense, Money, Month};
use crate::services::split::{aggregate_by_month, category_shares, summarize, CategoryShare, Summary};
use crate::storage::Storage;

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// Full data export structure
#[derive(Debug, Clone, Serialize)]
pub struct FullExport {
    /// Schema version for compatibility checking
    pub schema_version: String,

    /// Export timestamp
    pub exported_at: DateTime<Utc>,

    /// Application version that created the export
    pub app_version: String,

    /// Member names; `None` if the roster was never set
    pub members: Option<Vec<String>>,

    /// All expenses in ledger order
    pub expenses: Vec<Expense>,

    /// Ledger-wide statistics; `None` for an empty ledger
    pub summary: Option<Summary>,

    /// Totals per month, oldest first
    pub monthly_totals: Vec<MonthTotal>,

    /// Totals per category, largest first
    pub category_totals: Vec<CategoryShare>,
}

#[derive(Debug, Clone, Serialize)]
pub struct MonthTotal {
    pub month: Month,
    pub total: Money,
}

impl FullExport {
    /// Create a new full export from storage
    pub fn from_storage(storage: &Storage) -> SplitResult<Self> {
        let roster = storage.roster.load()?;
        let expenses = storage.ledger.load_all()?;

        let monthly_totals = aggregate_by_month(&expenses)
            .into_iter()
            .map(|(month, total)| MonthTotal { month, total })
            .collect();

        Ok(Self {
            schema_version: EXPORT_SCHEMA_VERSION.to_string(),
            exported_at: Utc::now(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            members: roster.map(|r| r.names().into_iter().map(String::from).collect()),
            summary: summarize(&expenses),
            category_totals: category_shares(&expenses),
            monthly_totals,
            expenses,
        })
    }
}

/// Export everything to JSON
pub fn export_full_json<W: Write>(storage: &Storage, writer: &mut W, pretty: bool) -> SplitResult<()> {
    let export = FullExport::from_storage(storage)?;

    if pretty {
        serde_json::to_writer_pretty(writer, &export)
    } else {
        serde_json::to_writer(writer, &export)
    }
    .map_err(|e| SplitError::Export(e.to_string()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::HousesplitPaths;
    use crate::models::Roster;
    use tempfile::TempDir;

    fn create_test_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = HousesplitPaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::new(paths).unwrap();
        (temp_dir, storage)
    }

    #[test]
    fn test_full_export() {
        let (_temp_dir, storage) = create_test_storage();
        let jan = Month::new(2025, 1).unwrap();

        storage
            .roster
            .replace_all(&Roster::from_names(["Ana", "Bruno"]))
            .unwrap();
        storage
            .ledger
            .append(Expense::new(jan, "Internet", Money::from_cents(10000)))
            .unwrap();
        storage
            .ledger
            .append(Expense::new(jan, "Energia", Money::from_cents(5000)))
            .unwrap();

        let export = FullExport::from_storage(&storage).unwrap();

        assert_eq!(export.schema_version, EXPORT_SCHEMA_VERSION);
        assert_eq!(export.members.as_ref().unwrap().len(), 2);
        assert_eq!(export.expenses.len(), 2);
        assert_eq!(export.monthly_totals.len(), 1);
        assert_eq!(export.monthly_totals[0].total, Money::from_cents(15000));
        assert_eq!(export.category_totals[0].category, "Internet");
    }

    #[test]
    fn test_json_output() {
        let (_temp_dir, storage) = create_test_storage();
        storage
            .ledger
            .append(Expense::new(
                Month::new(2025, 2).unwrap(),
                "Gás",
                Money::from_cents(8000),
            ))
            .unwrap();

        let mut output = Vec::new();
        export_full_json(&storage, &mut output, true).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&output).unwrap();
        assert_eq!(value["members"], serde_json::Value::Null);
        assert_eq!(value["expenses"][0]["month"], "2025-02");
        assert_eq!(value["expenses"][0]["amount"], 8000);
        assert_eq!(value["summary"]["total"], 8000);
    }

    #[test]
    fn test_empty_export() {
        let (_temp_dir, storage) = create_test_storage();
        let export = FullExport::from_storage(&storage).unwrap();

        assert!(export.expenses.is_empty());
        assert!(export.summary.is_none());
        assert!(export.category_totals.is_empty());
    }
}
