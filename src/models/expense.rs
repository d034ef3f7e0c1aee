//! Expense record model
//!
//! One row of the shared ledger: which month it belongs to, what kind of bill
//! it was, and how much it cost.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::money::Money;
use super::month::Month;

/// A shared household expense
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Expense {
    /// Month the expense is billed to
    pub month: Month,

    /// Category label (e.g., "Energia", "Internet")
    pub category: String,

    /// Amount paid, never negative
    pub amount: Money,
}

impl Expense {
    /// Create a new expense record
    pub fn new(month: Month, category: impl Into<String>, amount: Money) -> Self {
        Self {
            month,
            category: category.into().trim().to_string(),
            amount,
        }
    }

    /// Validate the expense
    pub fn validate(&self) -> Result<(), ExpenseValidationError> {
        if self.category.trim().is_empty() {
            return Err(ExpenseValidationError::EmptyCategory);
        }

        if self.amount.is_negative() {
            return Err(ExpenseValidationError::NegativeAmount(self.amount));
        }

        Ok(())
    }

    /// True when month, category and amount all match exactly
    pub fn matches(&self, month: Month, category: &str, amount: Money) -> bool {
        self.month == month && self.category == category && self.amount == amount
    }
}

impl fmt::Display for Expense {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.month, self.category, self.amount)
    }
}

/// Validation errors for expenses
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExpenseValidationError {
    EmptyCategory,
    NegativeAmount(Money),
}

impl fmt::Display for ExpenseValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyCategory => write!(f, "Expense category cannot be empty"),
            Self::NegativeAmount(amount) => {
                write!(f, "Expense amount cannot be negative: {}", amount)
            }
        }
    }
}

impl std::error::Error for ExpenseValidationError {}
