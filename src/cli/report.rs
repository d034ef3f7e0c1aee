//! CLI commands for reports

use clap::Subcommand;

use crate::config::Settings;
use crate::error::SplitResult;
use crate::models::Month;
use crate::reports::{CategoryReport, SummaryReport, TrendReport};
use crate::storage::Storage;

/// Report subcommands
#[derive(Subcommand, Debug)]
pub enum ReportCommands {
    /// Total, average, largest and smallest expense
    Summary,

    /// Spending per month over time
    #[command(alias = "trend")]
    ByMonth,

    /// Spending per category with its share of the total
    ByCategory {
        /// Only count this month
        #[arg(short, long)]
        month: Option<Month>,

        /// Show top N categories only
        #[arg(long)]
        top: Option<usize>,
    },
}

/// Handle report commands
pub fn handle_report_command(
    storage: &Storage,
    settings: &Settings,
    cmd: ReportCommands,
) -> SplitResult<()> {
    let mut ledger = storage.ledger.load_all()?;
    let currency = &settings.currency;

    match cmd {
        ReportCommands::Summary => {
            print!("{}", SummaryReport::generate(&ledger).format_terminal(currency));
        }

        ReportCommands::ByMonth => {
            print!("{}", TrendReport::generate(&ledger).format_terminal(currency));
        }

        ReportCommands::ByCategory { month, top } => {
            if let Some(month) = month {
                ledger.retain(|e| e.month == month);
            }

            let mut report = CategoryReport::generate(&ledger);
            if let Some(limit) = top {
                report.categories.truncate(limit);
            }
            print!("{}", report.format_terminal(currency));
        }
    }

    Ok(())
}
