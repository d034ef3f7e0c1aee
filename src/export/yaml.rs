//! YAML Export functionality
//!
//! Exports the full snapshot to YAML for a human-readable backup.

use std::io::Write;

use crate::error::{SplitError, SplitResult};
use crate::export::json::FullExport;
use crate::storage::Storage;

/// Export everything to YAML
pub fn export_full_yaml<W: Write>(storage: &Storage, writer: &mut W) -> SplitResult<()> {
    let export = FullExport::from_storage(storage)?;

    let header = format!(
        "# housesplit export\n# Generated: {}\n# App Version: {}\n# Amounts are in cents.\n\n",
        export.exported_at, export.app_version
    );
    writer
        .write_all(header.as_bytes())
        .map_err(|e| SplitError::Export(e.to_string()))?;

    serde_yaml::to_writer(writer, &export).map_err(|e| SplitError::Export(e.to_string()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::HousesplitPaths;
    use crate::models::{Expense, Money, Month, Roster};
    use tempfile::TempDir;

    #[test]
    fn test_yaml_export() {
        let temp_dir = TempDir::new().unwrap();
        let paths = HousesplitPaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::new(paths).unwrap();

        storage
            .roster
            .replace_all(&Roster::from_names(["Ana"]))
            .unwrap();
        storage
            .ledger
            .append(Expense::new(
                Month::new(2025, 1).unwrap(),
                "Aluguel",
                Money::from_cents(90000),
            ))
            .unwrap();

        let mut output = Vec::new();
        export_full_yaml(&storage, &mut output).unwrap();
        let yaml = String::from_utf8(output).unwrap();

        assert!(yaml.starts_with("# housesplit export"));
        assert!(yaml.contains("schema_version"));
        assert!(yaml.contains("Aluguel"));

        let value: serde_yaml::Value = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(value["members"][0].as_str(), Some("Ana"));
    }
}
