//! Path management for housesplit
//!
//! ## Path Resolution Order
//!
//! 1. `--data-dir` flag or `HOUSESPLIT_DATA_DIR` environment variable
//! 2. The platform config directory from `directories::ProjectDirs`
//!    (`~/.config/housesplit` on Linux, `%APPDATA%\housesplit` on Windows)

use std::path::{Path, PathBuf};

use directories::ProjectDirs;

use crate::error::SplitError;

/// Environment variable that overrides the base directory
pub const DATA_DIR_ENV: &str = "HOUSESPLIT_DATA_DIR";

/// Manages all paths used by housesplit
#[derive(Debug, Clone)]
pub struct HousesplitPaths {
    /// Base directory for all housesplit data
    base_dir: PathBuf,
}

impl HousesplitPaths {
    /// Create a new HousesplitPaths instance
    ///
    /// # Errors
    ///
    /// Returns an error if no platform config directory can be determined.
    pub fn new() -> Result<Self, SplitError> {
        let base_dir = match std::env::var_os(DATA_DIR_ENV) {
            Some(custom) if !custom.is_empty() => PathBuf::from(custom),
            _ => resolve_default_path()?,
        };

        Ok(Self { base_dir })
    }

    /// Create paths with a custom base directory (CLI flag, tests)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Get the data directory holding the CSV files
    pub fn data_dir(&self) -> PathBuf {
        self.base_dir.join("data")
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Get the path to the audit log
    pub fn audit_log(&self) -> PathBuf {
        self.base_dir.join("audit.log")
    }

    /// Get the path to the roster file (integrantes.csv)
    pub fn roster_file(&self) -> PathBuf {
        self.data_dir().join("integrantes.csv")
    }

    /// Get the path to the ledger file (contas.csv)
    pub fn ledger_file(&self) -> PathBuf {
        self.data_dir().join("contas.csv")
    }

    /// Ensure the base and data directories exist
    pub fn ensure_directories(&self) -> Result<(), SplitError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| SplitError::Io(format!("Failed to create base directory: {}", e)))?;

        std::fs::create_dir_all(self.data_dir())
            .map_err(|e| SplitError::Io(format!("Failed to create data directory: {}", e)))?;

        Ok(())
    }

    /// Check if housesplit has been initialized (config file exists)
    pub fn is_initialized(&self) -> bool {
        self.settings_file().exists()
    }
}

fn resolve_default_path() -> Result<PathBuf, SplitError> {
    ProjectDirs::from("", "", "housesplit")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .ok_or_else(|| SplitError::Config("Could not determine a config directory".into()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_custom_base_dir() {
        let temp_dir = TempDir::new().unwrap();
        let paths = HousesplitPaths::with_base_dir(temp_dir.path().to_path_buf());

        assert_eq!(paths.base_dir(), temp_dir.path());
        assert_eq!(paths.data_dir(), temp_dir.path().join("data"));
    }

    #[test]
    fn test_ensure_directories() {
        let temp_dir = TempDir::new().unwrap();
        let paths = HousesplitPaths::with_base_dir(temp_dir.path().join("nested"));

        paths.ensure_directories().unwrap();

        assert!(paths.data_dir().exists());
        assert!(!paths.is_initialized());
    }

    #[test]
    fn test_file_paths() {
        let temp_dir = TempDir::new().unwrap();
        let paths = HousesplitPaths::with_base_dir(temp_dir.path().to_path_buf());

        assert_eq!(paths.settings_file(), temp_dir.path().join("config.json"));
        assert_eq!(
            paths.roster_file(),
            temp_dir.path().join("data").join("integrantes.csv")
        );
        assert_eq!(
            paths.ledger_file(),
            temp_dir.path().join("data").join("contas.csv")
        );
    }
}
