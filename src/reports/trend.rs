//! Trend Report
//!
//! Monthly totals in chronological order, drawn as a horizontal bar chart.

use crate::display::report::format_bar;
use crate::models::{CurrencyFormat, Expense, Money, Month};
use crate::services::split::aggregate_by_month;

use super::BAR_WIDTH;

/// Total spending per month
#[derive(Debug, Clone)]
pub struct TrendReport {
    pub months: Vec<(Month, Money)>,
}

impl TrendReport {
    pub fn generate(ledger: &[Expense]) -> Self {
        Self {
            months: aggregate_by_month(ledger).into_iter().collect(),
        }
    }

    /// Largest monthly total, used to scale the bars
    pub fn peak(&self) -> Money {
        self.months
            .iter()
            .map(|(_, total)| *total)
            .max()
            .unwrap_or_default()
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self, currency: &CurrencyFormat) -> String {
        if self.months.is_empty() {
            return "No data available for the trend.\n".to_string();
        }

        let peak = self.peak().as_f64();
        let mut output = String::from("Spending Trend\n");
        output.push_str(&"=".repeat(60));
        output.push('\n');

        for (month, total) in &self.months {
            output.push_str(&format!(
                "{}  {}  {:>14}\n",
                month,
                format_bar(total.as_f64(), peak, BAR_WIDTH),
                currency.format(*total)
            ));
        }

        output
    }
}
