//! Custom error types for housesplit
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

use crate::models::Month;

/// The main error type for housesplit operations
#[derive(Error, Debug)]
pub enum SplitError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// CSV reading/writing errors
    #[error("CSV error: {0}")]
    Csv(String),

    /// A required field was missing or invalid
    #[error("Validation error: {0}")]
    Validation(String),

    /// No ledger records exist for the requested month
    #[error("No expenses recorded for {month}")]
    NoData { month: Month },

    /// The roster is empty when a split is requested
    #[error("No household members registered")]
    NoMembers,

    /// Currency text could not be turned back into an amount
    #[error("Malformed amount: {0}")]
    MalformedAmount(String),

    /// Export errors
    #[error("Export error: {0}")]
    Export(String),

    /// Storage errors
    #[error("Storage error: {0}")]
    Storage(String),
}

impl SplitError {
    /// Create a "no data" error for a month
    pub fn no_data(month: Month) -> Self {
        Self::NoData { month }
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Check if this is a malformed amount error
    pub fn is_malformed_amount(&self) -> bool {
        matches!(self, Self::MalformedAmount(_))
    }
}

// Implement From traits for common error types

impl From<std::io::Error> for SplitError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for SplitError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

impl From<csv::Error> for SplitError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err.to_string())
    }
}

/// Result type alias for housesplit operations
pub type SplitResult<T> = Result<T, SplitError>;
