//! Category Report
//!
//! Spending per category with each category's share of the total.

use crate::display::report::{format_bar, format_percentage, label, separator};
use crate::models::{CurrencyFormat, Expense, Money};
use crate::services::split::{category_shares, CategoryShare};

use super::BAR_WIDTH;

const LABEL_WIDTH: usize = 20;

/// Category breakdown, largest first
#[derive(Debug, Clone)]
pub struct CategoryReport {
    pub categories: Vec<CategoryShare>,
    pub total: Money,
}

impl CategoryReport {
    pub fn generate(ledger: &[Expense]) -> Self {
        let categories = category_shares(ledger);
        let total = categories.iter().map(|c| c.total).sum();
        Self { categories, total }
    }

    /// Get the top spending categories
    pub fn top(&self, limit: usize) -> &[CategoryShare] {
        &self.categories[..limit.min(self.categories.len())]
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self, currency: &CurrencyFormat) -> String {
        if self.categories.is_empty() {
            return "No data available for the category breakdown.\n".to_string();
        }

        let peak = self
            .categories
            .first()
            .map(|c| c.total.as_f64())
            .unwrap_or_default();

        let mut output = String::from("Spending by Category\n");
        output.push_str(&"=".repeat(80));
        output.push('\n');

        for category in &self.categories {
            output.push_str(&format!(
                "{}  {}  {:>14} {:>6}\n",
                label(&category.category, LABEL_WIDTH),
                format_bar(category.total.as_f64(), peak, BAR_WIDTH),
                currency.format(category.total),
                format_percentage(category.percentage)
            ));
        }

        output.push_str(&separator(80));
        output.push('\n');
        output.push_str(&format!(
            "{}  {}  {:>14}\n",
            label("Total", LABEL_WIDTH),
            " ".repeat(BAR_WIDTH),
            currency.format(self.total)
        ));

        output
    }
}
