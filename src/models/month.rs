//! Canonical year-month value
//!
//! Every expense is keyed by a `Month`. The canonical text form is `YYYY-MM`,
//! which is what the ledger file stores and what grouping and filtering use.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use crate::error::{SplitError, SplitResult};

/// A calendar month (e.g., "2025-01")
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Month {
    year: i32,
    month: u32,
}

impl Month {
    /// Create a month, validating the month number and a four-digit year
    pub fn new(year: i32, month: u32) -> SplitResult<Self> {
        if !(1..=12).contains(&month) {
            return Err(SplitError::Validation(format!(
                "Month must be between 1 and 12, got {}",
                month
            )));
        }
        if !(1..=9999).contains(&year) {
            return Err(SplitError::Validation(format!(
                "Year must have four digits, got {}",
                year
            )));
        }
        Ok(Self { year, month })
    }

    /// The month a date falls in
    pub fn from_date(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    /// Month-first label used by the month/year selector (e.g., "01-2025")
    pub fn selector_label(&self) -> String {
        format!("{:02}-{:04}", self.month, self.year)
    }

    /// Parse a month in any of the accepted forms
    ///
    /// - `YYYY-MM` (canonical)
    /// - `MM-YYYY` or `MM/YYYY` (selector form)
    /// - `YYYY-MM-DD` (the day is dropped)
    pub fn parse(s: &str) -> SplitResult<Self> {
        let s = s.trim();
        let invalid = || {
            SplitError::Validation(format!(
                "Invalid month '{}': expected YYYY-MM or MM-YYYY",
                s
            ))
        };

        let parts: Vec<&str> = s.split(['-', '/']).collect();
        if parts
            .iter()
            .any(|p| p.is_empty() || !p.chars().all(|c| c.is_ascii_digit()))
        {
            return Err(invalid());
        }

        match parts.as_slice() {
            [year, month] if year.len() == 4 && month.len() <= 2 => {
                Self::new(parse_num(year, &invalid)?, parse_num(month, &invalid)?)
            }
            [month, year] if year.len() == 4 && month.len() <= 2 => {
                Self::new(parse_num(year, &invalid)?, parse_num(month, &invalid)?)
            }
            [year, month, day] if year.len() == 4 && month.len() <= 2 && day.len() <= 2 => {
                let date = NaiveDate::from_ymd_opt(
                    parse_num(year, &invalid)?,
                    parse_num(month, &invalid)?,
                    parse_num(day, &invalid)?,
                )
                .ok_or_else(invalid)?;
                Ok(Self::from_date(date))
            }
            _ => Err(invalid()),
        }
    }

    /// The month after this one
    pub fn next(&self) -> Self {
        if self.month == 12 {
            Self {
                year: self.year + 1,
                month: 1,
            }
        } else {
            Self {
                year: self.year,
                month: self.month + 1,
            }
        }
    }

    /// The month before this one
    pub fn prev(&self) -> Self {
        if self.month == 1 {
            Self {
                year: self.year - 1,
                month: 12,
            }
        } else {
            Self {
                year: self.year,
                month: self.month - 1,
            }
        }
    }
}

fn parse_num<T: FromStr>(s: &str, invalid: &impl Fn() -> SplitError) -> SplitResult<T> {
    s.parse().map_err(|_| invalid())
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl FromStr for Month {
    type Err = SplitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Serialize for Month {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Month {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Month::parse(&s).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_display() {
        assert_eq!(Month::new(2025, 1).unwrap().to_string(), "2025-01");
        assert_eq!(Month::new(2024, 12).unwrap().to_string(), "2024-12");
    }

    #[test]
    fn test_parse_forms() {
        let jan = Month::new(2025, 1).unwrap();
        assert_eq!(Month::parse("2025-01").unwrap(), jan);
        assert_eq!(Month::parse("2025-1").unwrap(), jan);
        assert_eq!(Month::parse("01-2025").unwrap(), jan);
        assert_eq!(Month::parse("01/2025").unwrap(), jan);
        assert_eq!(Month::parse("2025-01-31").unwrap(), jan);
        assert_eq!(Month::parse(" 2025-01 ").unwrap(), jan);
    }

    #[test]
    fn test_parse_rejects_invalid() {
        assert!(Month::parse("2025-13").is_err());
        assert!(Month::parse("00-2025").is_err());
        assert!(Month::parse("2025").is_err());
        assert!(Month::parse("25-01").is_err());
        assert!(Month::parse("2025-02-30").is_err());
        assert!(Month::parse("jan-2025").is_err());
        assert!(Month::parse("").is_err());
    }

    #[test]
    fn test_selector_label() {
        assert_eq!(Month::new(2025, 3).unwrap().selector_label(), "03-2025");
    }

    #[test]
    fn test_ordering_is_chronological() {
        let a = Month::new(2024, 12).unwrap();
        let b = Month::new(2025, 1).unwrap();
        assert!(a < b);
        assert_eq!(a.next(), b);
        assert_eq!(b.prev(), a);
    }

    #[test]
    fn test_serde_as_string() {
        let m = Month::new(2025, 7).unwrap();
        let json = serde_json::to_string(&m).unwrap();
        assert_eq!(json, "\"2025-07\"");
        let back: Month = serde_json::from_str("\"07-2025\"").unwrap();
        assert_eq!(back, m);
    }
}
