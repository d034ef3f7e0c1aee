//! Audit CLI command

use crate::error::SplitResult;
use crate::storage::Storage;

/// Print the most recent audit entries, oldest first
pub fn handle_audit_command(storage: &Storage, limit: usize) -> SplitResult<()> {
    let logger = match storage.audit_logger() {
        Some(logger) => logger,
        None => {
            println!("Audit logging is disabled in settings.");
            return Ok(());
        }
    };

    let entries = logger.read_recent(limit)?;
    if entries.is_empty() {
        println!("No audit entries.");
        return Ok(());
    }

    for entry in &entries {
        println!("{}", entry.format_human_readable());
    }

    Ok(())
}
