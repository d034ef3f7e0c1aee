//! housesplit - split shared household bills evenly
//!
//! This library keeps a roster of household members and a ledger of monthly
//! expenses in two CSV files, and computes what each member owes for a month.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (money, months, expenses, roster)
//! - `storage`: CSV file storage layer
//! - `services`: Business logic and the split calculator
//! - `audit`: Audit logging system
//! - `reports`, `display`, `export`: presentation and data export
//! - `cli`: command handlers for the `housesplit` binary
//!
//! # Example
//!
//! ```rust,ignore
//! use housesplit::config::{paths::HousesplitPaths, settings::Settings};
//! use housesplit::storage::Storage;
//! use housesplit::services::compute_share;
//!
//! let paths = HousesplitPaths::new()?;
//! let storage = Storage::new(paths)?;
//! let roster = storage.roster.load()?.unwrap_or_default();
//! let share = compute_share(&storage.ledger.load_all()?, &roster, "2025-01".parse()?)?;
//! ```

pub mod audit;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod logging;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;

pub use error::{SplitError, SplitResult};
