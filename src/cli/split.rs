//! Split CLI command

use crate::config::Settings;
use crate::error::SplitResult;
use crate::models::Month;
use crate::services::{available_months, compute_share};
use crate::storage::Storage;

/// Show what each member owes for a month
///
/// Without a month, the latest month in the ledger is used.
pub fn handle_split_command(
    storage: &Storage,
    settings: &Settings,
    month: Option<Month>,
) -> SplitResult<()> {
    let ledger = storage.ledger.load_all()?;
    let roster = storage.roster.load()?.unwrap_or_default();

    let month = match month.or_else(|| available_months(&ledger).last().copied()) {
        Some(m) => m,
        None => {
            println!("No expenses recorded yet. Use 'housesplit expense add' first.");
            return Ok(());
        }
    };

    let share = compute_share(&ledger, &roster, month)?;
    let currency = &settings.currency;

    println!("Split for {}", share.month);
    println!("{}", "=".repeat(40));
    println!(
        "Total:      {} ({} expense(s))",
        currency.format(share.total),
        share.records
    );
    println!("Members:    {} ({})", share.members, roster.join(", "));
    println!("Each pays:  {}", currency.format(share.per_member));

    Ok(())
}
