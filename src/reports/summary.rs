//! Summary Report
//!
//! Headline indicators over the whole ledger.

use crate::models::{CurrencyFormat, Expense, Month};
use crate::services::split::{available_months, summarize, Summary};

/// Ledger-wide totals and the months they cover
#[derive(Debug, Clone)]
pub struct SummaryReport {
    /// `None` when the ledger is empty
    pub summary: Option<Summary>,
    /// Months with at least one expense, oldest first
    pub months: Vec<Month>,
}

impl SummaryReport {
    pub fn generate(ledger: &[Expense]) -> Self {
        Self {
            summary: summarize(ledger),
            months: available_months(ledger),
        }
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self, currency: &CurrencyFormat) -> String {
        let summary = match &self.summary {
            Some(s) => s,
            None => return "No data available for the indicators.\n".to_string(),
        };

        let mut output = String::new();
        output.push_str("Expense Summary\n");
        output.push_str(&"=".repeat(40));
        output.push('\n');

        output.push_str(&format!("{:<16} {:>20}\n", "Total", currency.format(summary.total)));
        output.push_str(&format!("{:<16} {:>20}\n", "Average", currency.format(summary.mean)));
        output.push_str(&format!("{:<16} {:>20}\n", "Largest", currency.format(summary.max)));
        output.push_str(&format!("{:<16} {:>20}\n", "Smallest", currency.format(summary.min)));
        output.push_str(&format!("{:<16} {:>20}\n", "Records", summary.count));

        if let (Some(first), Some(last)) = (self.months.first(), self.months.last()) {
            output.push_str(&format!(
                "{:<16} {:>20}\n",
                "Months",
                format!("{} ({} to {})", self.months.len(), first, last)
            ));
        }

        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;

    fn expense(year: i32, month: u32, category: &str, cents: i64) -> Expense {
        Expense::new(Month::new(year, month).unwrap(), category, Money::from_cents(cents))
    }

    #[test]
    fn test_summary_report() {
        let ledger = vec![
            expense(2025, 1, "Aluguel", 150000),
            expense(2025, 2, "Energia", 20000),
        ];
        let report = SummaryReport::generate(&ledger);
        let output = report.format_terminal(&CurrencyFormat::default());

        assert!(output.contains("R$ 1.700,00"));
        assert!(output.contains("R$ 850,00"));
        assert!(output.contains("2 (2025-01 to 2025-02)"));
    }

    #[test]
    fn test_empty_summary_report() {
        let report = SummaryReport::generate(&[]);
        assert!(report.summary.is_none());
        assert!(report
            .format_terminal(&CurrencyFormat::default())
            .contains("No data available"));
    }
}
