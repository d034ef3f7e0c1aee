//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod audit;
pub mod expense;
pub mod export;
pub mod report;
pub mod roster;
pub mod split;

pub use audit::handle_audit_command;
pub use expense::{handle_expense_command, ExpenseCommands};
pub use export::{handle_export_command, ExportCommands};
pub use report::{handle_report_command, ReportCommands};
pub use roster::{handle_roster_command, RosterCommands};
pub use split::handle_split_command;
