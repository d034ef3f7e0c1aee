//! Currency display codec
//!
//! The single place where amounts are turned into display text and where
//! display text (as shown in tables, possibly with a symbol and digit
//! grouping) is turned back into [`Money`]. Storage never sees this form.

use serde::{Deserialize, Serialize};

use super::money::Money;
use crate::error::{SplitError, SplitResult};

/// How amounts are rendered for people to read
///
/// Fields missing from a settings file fall back to the defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CurrencyFormat {
    /// Currency symbol placed before the amount
    pub symbol: String,
    /// Separator between whole units and cents
    pub decimal_separator: char,
    /// Separator between groups of three digits
    pub grouping_separator: char,
}

impl Default for CurrencyFormat {
    /// Brazilian real, e.g. `R$ 1.234,56`
    fn default() -> Self {
        Self {
            symbol: "R$".to_string(),
            decimal_separator: ',',
            grouping_separator: '.',
        }
    }
}

impl CurrencyFormat {
    pub fn new(symbol: impl Into<String>, decimal_separator: char, grouping_separator: char) -> Self {
        Self {
            symbol: symbol.into(),
            decimal_separator,
            grouping_separator,
        }
    }

    /// Format an amount with symbol and grouping, e.g. `R$ 1.234,56`
    pub fn format(&self, amount: Money) -> String {
        let sign = if amount.is_negative() { "-" } else { "" };
        let whole = group_digits(amount.units().unsigned_abs(), self.grouping_separator);
        let number = format!("{}{}{:02}", whole, self.decimal_separator, amount.cents_part());

        if self.symbol.is_empty() {
            format!("{}{}", sign, number)
        } else {
            format!("{}{} {}", sign, self.symbol, number)
        }
    }

    /// Parse display text back into an amount
    ///
    /// Strips the symbol, whitespace and grouping separators. Plain decimals
    /// such as `"100.50"` or `"100,50"` are also accepted, so user input and
    /// table text go through the same path.
    pub fn parse(&self, text: &str) -> SplitResult<Money> {
        let malformed = || SplitError::MalformedAmount(text.trim().to_string());

        let cleaned: String = text.chars().filter(|c| !c.is_whitespace()).collect();
        let (negative, rest) = match cleaned.strip_prefix('-') {
            Some(stripped) => (true, stripped),
            None => (false, cleaned.as_str()),
        };
        let symbol: String = self.symbol.chars().filter(|c| !c.is_whitespace()).collect();
        let rest = if symbol.is_empty() {
            rest
        } else {
            rest.strip_prefix(symbol.as_str()).unwrap_or(rest)
        };

        if rest.is_empty() {
            return Err(malformed());
        }

        let plain = if let Some((int_part, frac)) = rest.rsplit_once(self.decimal_separator) {
            let int_part: String = int_part
                .chars()
                .filter(|c| *c != self.grouping_separator)
                .collect();
            format!("{}.{}", int_part, frac)
        } else if self.is_grouped(rest) {
            rest.chars()
                .filter(|c| *c != self.grouping_separator)
                .collect()
        } else {
            rest.to_string()
        };

        let amount = Money::parse(&plain).map_err(|_| malformed())?;
        Ok(if negative {
            Money::from_cents(-amount.cents())
        } else {
            amount
        })
    }

    /// True when `text` is digits split into valid thousands groups
    fn is_grouped(&self, text: &str) -> bool {
        let mut parts = text.split(self.grouping_separator);
        let Some(head) = parts.next() else {
            return false;
        };
        let tail: Vec<&str> = parts.collect();

        !tail.is_empty()
            && (1..=3).contains(&head.len())
            && head.chars().all(|c| c.is_ascii_digit())
            && tail
                .iter()
                .all(|g| g.len() == 3 && g.chars().all(|c| c.is_ascii_digit()))
    }
}

/// Insert `separator` between groups of three digits
fn group_digits(value: u64, separator: char) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(separator);
        }
        out.push(ch);
    }
    out
}
