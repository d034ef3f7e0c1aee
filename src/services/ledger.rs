//! Ledger service
//!
//! Provides business logic for recording and removing shared expenses:
//! input validation, month normalization and currency parsing.

use std::cmp::Ordering;

use crate::audit::EntityType;
use crate::config::Settings;
use crate::error::{SplitError, SplitResult};
use crate::models::{Expense, Month};
use crate::storage::Storage;

/// Column a ledger listing can be sorted by
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortColumn {
    Month,
    Category,
    Amount,
}

/// Filtering and ordering for a ledger listing
#[derive(Debug, Clone, Default)]
pub struct ListOptions {
    /// Only show expenses for this month
    pub month: Option<Month>,
    /// Sort by this column (file order when `None`)
    pub sort: Option<SortColumn>,
    /// Sort descending instead of ascending
    pub descending: bool,
}

/// Service for ledger management
pub struct LedgerService<'a> {
    storage: &'a Storage,
    settings: &'a Settings,
}

impl<'a> LedgerService<'a> {
    /// Create a new ledger service
    pub fn new(storage: &'a Storage, settings: &'a Settings) -> Self {
        Self { storage, settings }
    }

    /// Record a new expense from user input
    ///
    /// `month` may be in any form `Month::parse` accepts. `amount` may be a
    /// plain decimal or currency text.
    pub fn add_expense(&self, month: &str, category: &str, amount: &str) -> SplitResult<Expense> {
        let category = category.trim();
        let amount = amount.trim();

        if category.is_empty() || amount.is_empty() {
            return Err(SplitError::Validation(
                "Category and amount are both required".into(),
            ));
        }

        let month = Month::parse(month)?;
        let amount = self.settings.currency.parse(amount)?;

        let expense = Expense::new(month, category, amount);
        expense
            .validate()
            .map_err(|e| SplitError::Validation(e.to_string()))?;

        if !self.settings.is_suggested_category(category) {
            tracing::debug!(category, "category is not in the suggested list");
        }

        self.storage.ledger.append(expense.clone())?;

        self.storage
            .log_create(EntityType::Expense, expense.to_string(), &expense);

        tracing::info!(month = %expense.month, category = %expense.category, amount = %expense.amount, "expense recorded");
        Ok(expense)
    }

    /// Delete the first expense matching a displayed row
    ///
    /// The amount may carry a currency symbol and grouping, as shown in
    /// listings. Returns `false` when nothing matched; the ledger is then
    /// left untouched.
    pub fn delete_displayed(&self, month: &str, category: &str, amount: &str) -> SplitResult<bool> {
        let month = Month::parse(month)?;
        let amount = self.settings.currency.parse(amount)?;
        let key = Expense::new(month, category, amount);

        match self.storage.ledger.delete(&key)? {
            Some(removed) => {
                self.storage
                    .log_delete(EntityType::Expense, removed.to_string(), &removed);
                tracing::info!(expense = %removed, "expense deleted");
                Ok(true)
            }
            None => {
                tracing::debug!(key = %key, "no matching expense to delete");
                Ok(false)
            }
        }
    }

    /// Load every expense
    pub fn all(&self) -> SplitResult<Vec<Expense>> {
        self.storage.ledger.load_all()
    }

    /// Load expenses, filtered and sorted per `options`
    pub fn list(&self, options: &ListOptions) -> SplitResult<Vec<Expense>> {
        let mut expenses = self.storage.ledger.load_all()?;

        if let Some(month) = options.month {
            expenses.retain(|e| e.month == month);
        }

        if let Some(column) = options.sort {
            expenses.sort_by(|a, b| {
                let ord = compare_by(column, a, b);
                if options.descending {
                    ord.reverse()
                } else {
                    ord
                }
            });
        }

        Ok(expenses)
    }
}

fn compare_by(column: SortColumn, a: &Expense, b: &Expense) -> Ordering {
    match column {
        SortColumn::Month => a.month.cmp(&b.month),
        SortColumn::Category => a
            .category
            .to_lowercase()
            .cmp(&b.category.to_lowercase()),
        SortColumn::Amount => a.amount.cmp(&b.amount),
    }
}
