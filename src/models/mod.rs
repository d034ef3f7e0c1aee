//! Core data models for housesplit
//!
//! This module contains the data structures of the bill-splitting domain:
//! amounts, months, expense records and the household roster.

pub mod currency;
pub mod expense;
pub mod money;
pub mod month;
pub mod roster;

pub use currency::CurrencyFormat;
pub use expense::{Expense, ExpenseValidationError};
pub use money::{Money, MoneyParseError};
pub use month::Month;
pub use roster::{Member, Roster};
