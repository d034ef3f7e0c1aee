//! Export module for housesplit
//!
//! Provides complete data export functionality in multiple formats:
//! - CSV: the ledger alone (spreadsheet-compatible)
//! - JSON: machine-readable snapshot of roster, ledger and statistics
//! - YAML: the same snapshot, human-readable

pub mod csv;
pub mod json;
pub mod yaml;

pub use csv::export_ledger_csv;
pub use json::{export_full_json, FullExport, EXPORT_SCHEMA_VERSION};
pub use yaml::export_full_yaml;
