//! Display formatting for terminal output
//!
//! Provides utilities for formatting ledgers, rosters and report fragments
//! for terminal display.

pub mod expense;
pub mod report;

pub use expense::{format_expense_table, format_roster};
