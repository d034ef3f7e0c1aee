//! Audit logging for housesplit
//!
//! Records every ledger append/delete and roster replacement in an
//! append-only JSONL file next to the settings.
//!
//! - `AuditEntry`: one operation with timestamp, entity and before/after values
//! - `AuditLogger`: appends entries and reads them back
//! - `roster_diff`: added/removed member summary for roster replacements

mod diff;
mod entry;
mod logger;

pub use diff::roster_diff;
pub use entry::{AuditEntry, EntityType, Operation};
pub use logger::AuditLogger;
