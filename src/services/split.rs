//! Split calculator
//!
//! Pure functions over an already-loaded ledger and roster: the per-member
//! share for a month, group-by-sum aggregations and summary statistics.
//! Nothing here touches storage.

use std::collections::{BTreeMap, BTreeSet};

use serde::Serialize;

use crate::error::{SplitError, SplitResult};
use crate::models::{Expense, Money, Month, Roster};

/// Each member's equal part of one month's expenses
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Share {
    pub month: Month,
    /// Sum of the month's expenses
    pub total: Money,
    /// Number of expense records in the month
    pub records: usize,
    /// Number of members splitting the total
    pub members: usize,
    /// `total / members`, rounded to the nearest cent
    pub per_member: Money,
    /// `total / members` without rounding, in currency units
    pub per_member_exact: f64,
}

/// Compute the per-member share for `month`
///
/// # Errors
///
/// - `NoData` when no expense falls in `month` (checked first)
/// - `NoMembers` when the roster is empty
pub fn compute_share(ledger: &[Expense], roster: &Roster, month: Month) -> SplitResult<Share> {
    let filtered: Vec<&Expense> = ledger.iter().filter(|e| e.month == month).collect();

    if filtered.is_empty() {
        return Err(SplitError::no_data(month));
    }

    let members = roster.len();
    let total: Money = filtered.iter().map(|e| e.amount).sum();
    let per_member = total.divide_rounded(members).ok_or(SplitError::NoMembers)?;

    Ok(Share {
        month,
        total,
        records: filtered.len(),
        members,
        per_member,
        per_member_exact: total.as_f64() / members as f64,
    })
}

/// Total per category, ordered by category name
pub fn aggregate_by_category(ledger: &[Expense]) -> BTreeMap<String, Money> {
    let mut totals: BTreeMap<String, Money> = BTreeMap::new();
    for expense in ledger {
        *totals.entry(expense.category.clone()).or_default() += expense.amount;
    }
    totals
}

/// Total per month, in chronological order
pub fn aggregate_by_month(ledger: &[Expense]) -> BTreeMap<Month, Money> {
    let mut totals: BTreeMap<Month, Money> = BTreeMap::new();
    for expense in ledger {
        *totals.entry(expense.month).or_default() += expense.amount;
    }
    totals
}

/// Distinct months present in the ledger, oldest first
pub fn available_months(ledger: &[Expense]) -> Vec<Month> {
    ledger
        .iter()
        .map(|e| e.month)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Summary statistics over a whole ledger
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub count: usize,
    pub total: Money,
    /// Mean record amount, rounded to the nearest cent
    pub mean: Money,
    pub max: Money,
    pub min: Money,
}

/// Total, mean, max and min; `None` for an empty ledger
pub fn summarize(ledger: &[Expense]) -> Option<Summary> {
    let max = ledger.iter().map(|e| e.amount).max()?;
    let min = ledger.iter().map(|e| e.amount).min()?;
    let total: Money = ledger.iter().map(|e| e.amount).sum();
    let mean = total.divide_rounded(ledger.len())?;

    Some(Summary {
        count: ledger.len(),
        total,
        mean,
        max,
        min,
    })
}

/// One category's slice of total spending
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryShare {
    pub category: String,
    pub total: Money,
    /// Percentage of the overall total (0 when the overall total is zero)
    pub percentage: f64,
}

/// Category totals with their percentage of the whole, largest first
pub fn category_shares(ledger: &[Expense]) -> Vec<CategoryShare> {
    let totals = aggregate_by_category(ledger);
    let grand_total: Money = totals.values().sum();

    let mut shares: Vec<CategoryShare> = totals
        .into_iter()
        .map(|(category, total)| {
            let percentage = if grand_total.is_zero() {
                0.0
            } else {
                total.cents() as f64 / grand_total.cents() as f64 * 100.0
            };
            CategoryShare {
                category,
                total,
                percentage,
            }
        })
        .collect();

    // Stable sort keeps name order for equal totals
    shares.sort_by(|a, b| b.total.cmp(&a.total));
    shares
}
