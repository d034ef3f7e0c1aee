//! Reports module for housesplit
//!
//! Text renditions of the ledger statistics: headline indicators, the
//! month-by-month trend and the category breakdown.

pub mod categories;
pub mod summary;
pub mod trend;

pub use categories::CategoryReport;
pub use summary::SummaryReport;
pub use trend::TrendReport;

/// Width of the bar column in chart reports
pub const BAR_WIDTH: usize = 30;
