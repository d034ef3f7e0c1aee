//! Storage layer for housesplit
//!
//! CSV file storage with atomic writes and automatic directory creation.
//! Repositories hold only a path: every operation re-reads the file.

pub mod file_io;
pub mod init;
pub mod ledger;
pub mod roster;

pub use file_io::{read_csv, write_bytes_atomic, write_csv_atomic};
pub use init::{initialize_storage, InitOutcome};
pub use ledger::LedgerRepository;
pub use roster::RosterRepository;

use serde::Serialize;

use crate::audit::{AuditEntry, AuditLogger, EntityType};
use crate::config::paths::HousesplitPaths;
use crate::error::SplitError;

/// Main storage coordinator that provides access to all repositories
pub struct Storage {
    paths: HousesplitPaths,
    pub roster: RosterRepository,
    pub ledger: LedgerRepository,
    audit: Option<AuditLogger>,
}

impl Storage {
    /// Create a new Storage instance with audit logging enabled
    pub fn new(paths: HousesplitPaths) -> Result<Self, SplitError> {
        paths.ensure_directories()?;

        Ok(Self {
            roster: RosterRepository::new(paths.roster_file()),
            ledger: LedgerRepository::new(paths.ledger_file()),
            audit: Some(AuditLogger::new(paths.audit_log())),
            paths,
        })
    }

    /// Turn audit logging off (settings `audit_enabled = false`)
    pub fn without_audit(mut self) -> Self {
        self.audit = None;
        self
    }

    pub fn paths(&self) -> &HousesplitPaths {
        &self.paths
    }

    /// The audit logger, if auditing is enabled
    pub fn audit_logger(&self) -> Option<&AuditLogger> {
        self.audit.as_ref()
    }

    /// Check if storage has been initialized
    pub fn is_initialized(&self) -> bool {
        self.paths.is_initialized()
    }

    // The log_* helpers run after a mutation has been saved. An audit write
    // failure is logged and swallowed so the caller still reports success.

    /// Record a create in the audit log
    pub fn log_create<T: Serialize>(
        &self,
        entity_type: EntityType,
        description: impl Into<String>,
        entity: &T,
    ) {
        self.log(AuditEntry::create(entity_type, description, entity))
    }

    /// Record a wholesale replacement in the audit log
    pub fn log_replace<T: Serialize>(
        &self,
        entity_type: EntityType,
        description: impl Into<String>,
        before: Option<&T>,
        after: &T,
        diff_summary: Option<String>,
    ) {
        self.log(AuditEntry::replace(
            entity_type,
            description,
            before,
            after,
            diff_summary,
        ))
    }

    /// Record a delete in the audit log
    pub fn log_delete<T: Serialize>(
        &self,
        entity_type: EntityType,
        description: impl Into<String>,
        entity: &T,
    ) {
        self.log(AuditEntry::delete(entity_type, description, entity))
    }

    fn log(&self, entry: AuditEntry) {
        let Some(logger) = &self.audit else {
            return;
        };
        if let Err(e) = logger.log(&entry) {
            tracing::warn!(
                path = %logger.path().display(),
                error = %e,
                "audit entry not written"
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::TempDir;

    #[test]
    fn test_storage_creation() {
        let temp_dir = TempDir::new().unwrap();
        let paths = HousesplitPaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::new(paths).unwrap();

        assert!(temp_dir.path().join("data").exists());
        assert!(!storage.is_initialized());
        assert!(storage.ledger.load_all().unwrap().is_empty());
        assert!(storage.roster.load().unwrap().is_none());
    }

    #[test]
    fn test_audit_can_be_disabled() {
        let temp_dir = TempDir::new().unwrap();
        let paths = HousesplitPaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::new(paths.clone()).unwrap().without_audit();

        storage.log_create(EntityType::Expense, "x", &json!({}));

        assert!(storage.audit_logger().is_none());
        assert!(!paths.audit_log().exists());
    }
}
