//! Expense display formatting
//!
//! Renders the ledger as a table and the roster as a numbered list.

use tabled::settings::object::Columns;
use tabled::settings::{Alignment, Style};
use tabled::{Table, Tabled};

use crate::models::{CurrencyFormat, Expense, Money, Roster};

#[derive(Tabled)]
struct ExpenseRow {
    #[tabled(rename = "Month")]
    month: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Amount")]
    amount: String,
}

/// Format expenses as a table with a total line
pub fn format_expense_table(expenses: &[Expense], currency: &CurrencyFormat) -> String {
    if expenses.is_empty() {
        return "No expenses found.\n".to_string();
    }

    let rows = expenses.iter().map(|e| ExpenseRow {
        month: e.month.to_string(),
        category: e.category.clone(),
        amount: currency.format(e.amount),
    });

    let mut table = Table::new(rows);
    table
        .with(Style::rounded())
        .modify(Columns::single(2), Alignment::right());

    let total: Money = expenses.iter().map(|e| e.amount).sum();

    format!(
        "{}\n{} expense(s), total {}\n",
        table,
        expenses.len(),
        currency.format(total)
    )
}

/// Format the roster as a numbered list
pub fn format_roster(roster: Option<&Roster>) -> String {
    match roster {
        None => "No members registered. Use 'housesplit roster set' first.\n".to_string(),
        Some(r) if r.is_empty() => "Roster is empty.\n".to_string(),
        Some(r) => {
            let mut output = format!("Members ({}):\n", r.len());
            for (i, member) in r.members().iter().enumerate() {
                output.push_str(&format!("  {}. {}\n", i + 1, member.name()));
            }
            output
        }
    }
}
