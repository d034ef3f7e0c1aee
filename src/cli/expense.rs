//! Expense CLI commands
//!
//! Implements CLI commands for recording, listing and deleting expenses.

use clap::{Subcommand, ValueEnum};

use crate::config::Settings;
use crate::display::format_expense_table;
use crate::error::SplitResult;
use crate::models::Month;
use crate::services::{LedgerService, ListOptions, SortColumn};
use crate::storage::Storage;

/// Column to sort a listing by
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum SortBy {
    Month,
    Category,
    Amount,
}

impl From<SortBy> for SortColumn {
    fn from(sort: SortBy) -> Self {
        match sort {
            SortBy::Month => SortColumn::Month,
            SortBy::Category => SortColumn::Category,
            SortBy::Amount => SortColumn::Amount,
        }
    }
}

/// Expense subcommands
#[derive(Subcommand)]
pub enum ExpenseCommands {
    /// Record a new expense
    Add {
        /// Month of the expense (YYYY-MM, MM-YYYY or MM/YYYY)
        month: String,
        /// Category, e.g. "Energia"
        category: String,
        /// Amount (e.g. "150", "150.00" or "R$ 150,00")
        #[arg(allow_hyphen_values = true)]
        amount: String,
    },

    /// List recorded expenses
    List {
        /// Only show this month
        #[arg(short, long)]
        month: Option<Month>,
        /// Sort by column
        #[arg(short, long, value_enum)]
        sort: Option<SortBy>,
        /// Sort in descending order
        #[arg(long, requires = "sort")]
        desc: bool,
    },

    /// Delete an expense by the values shown in the listing
    Delete {
        /// Month of the expense
        month: String,
        /// Category of the expense
        category: String,
        /// Amount, as listed (currency text is accepted)
        #[arg(allow_hyphen_values = true)]
        amount: String,
        /// Skip confirmation prompt
        #[arg(short, long)]
        force: bool,
    },

    /// Show the suggested categories
    Categories,
}

/// Handle an expense command
pub fn handle_expense_command(
    storage: &Storage,
    settings: &Settings,
    cmd: ExpenseCommands,
) -> SplitResult<()> {
    let service = LedgerService::new(storage, settings);

    match cmd {
        ExpenseCommands::Add {
            month,
            category,
            amount,
        } => {
            let expense = service.add_expense(&month, &category, &amount)?;
            println!(
                "Recorded {} {} for {}",
                expense.category,
                settings.currency.format(expense.amount),
                expense.month
            );
        }

        ExpenseCommands::List { month, sort, desc } => {
            let options = ListOptions {
                month,
                sort: sort.map(SortColumn::from),
                descending: desc,
            };
            let expenses = service.list(&options)?;
            print!("{}", format_expense_table(&expenses, &settings.currency));
        }

        ExpenseCommands::Delete {
            month,
            category,
            amount,
            force,
        } => {
            if !force {
                println!("This will delete the first expense matching:");
                println!("  {} {} {}", month, category, amount);
                println!("To proceed, run again with --force flag:");
                println!(
                    "  housesplit expense delete {} \"{}\" \"{}\" --force",
                    month, category, amount
                );
                return Ok(());
            }

            if service.delete_displayed(&month, &category, &amount)? {
                println!("Expense deleted.");
            } else {
                println!("No matching expense found. Nothing was deleted.");
            }
        }

        ExpenseCommands::Categories => {
            println!("Suggested categories:");
            for category in &settings.categories {
                println!("  {}", category);
            }
        }
    }

    Ok(())
}
