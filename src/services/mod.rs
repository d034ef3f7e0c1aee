//! Service layer for housesplit
//!
//! The service layer provides business logic on top of the storage layer,
//! handling input validation, normalization and the split computations.

pub mod ledger;
pub mod roster;
pub mod split;

pub use ledger::{LedgerService, ListOptions, SortColumn};
pub use roster::RosterService;
pub use split::{
    aggregate_by_category, aggregate_by_month, available_months, category_shares, compute_share,
    summarize, CategoryShare, Share, Summary,
};
