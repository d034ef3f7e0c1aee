//! Storage initialization
//!
//! Handles first-run setup: directories, settings file and an empty ledger.
//! The roster file is left absent until members are registered, so "no
//! roster yet" stays distinguishable from an empty one.

use crate::config::paths::HousesplitPaths;
use crate::config::settings::Settings;
use crate::error::SplitError;
use crate::models::Expense;

use super::ledger::LedgerRepository;

/// What `initialize_storage` actually created
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct InitOutcome {
    pub created_settings: bool,
    pub created_ledger: bool,
}

/// Initialize storage for a fresh installation
///
/// Existing files are never overwritten.
pub fn initialize_storage(
    paths: &HousesplitPaths,
    settings: &Settings,
) -> Result<InitOutcome, SplitError> {
    paths.ensure_directories()?;

    let mut outcome = InitOutcome::default();

    if !paths.settings_file().exists() {
        settings.save(paths)?;
        outcome.created_settings = true;
    }

    if !paths.ledger_file().exists() {
        let empty: [Expense; 0] = [];
        LedgerRepository::new(paths.ledger_file()).save(&empty)?;
        outcome.created_ledger = true;
    }

    tracing::info!(base = %paths.base_dir().display(), ?outcome, "storage initialized");
    Ok(outcome)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_initialize_fresh() {
        let temp_dir = TempDir::new().unwrap();
        let paths = HousesplitPaths::with_base_dir(temp_dir.path().to_path_buf());

        let outcome = initialize_storage(&paths, &Settings::default()).unwrap();

        assert!(outcome.created_settings);
        assert!(outcome.created_ledger);
        assert!(paths.is_initialized());
        assert_eq!(
            std::fs::read_to_string(paths.ledger_file()).unwrap(),
            "Data,Conta,Valor\n"
        );
        assert!(!paths.roster_file().exists());
    }

    #[test]
    fn test_initialize_is_idempotent() {
        let temp_dir = TempDir::new().unwrap();
        let paths = HousesplitPaths::with_base_dir(temp_dir.path().to_path_buf());

        initialize_storage(&paths, &Settings::default()).unwrap();
        std::fs::write(paths.ledger_file(), "Data,Conta,Valor\n2025-01,Gás,10.00\n").unwrap();

        let outcome = initialize_storage(&paths, &Settings::default()).unwrap();
        assert_eq!(outcome, InitOutcome::default());
        assert!(std::fs::read_to_string(paths.ledger_file())
            .unwrap()
            .contains("Gás"));
    }
}
