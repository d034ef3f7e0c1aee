//! Household roster model
//!
//! The roster is the ordered list of people who share the bills. Names are
//! not required to be unique.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A household member
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Member(String);

impl Member {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn name(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Member {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Ordered list of household members
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Roster {
    members: Vec<Member>,
}

impl Roster {
    /// Build a roster from names, trimming each and dropping blank entries
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let members = names
            .into_iter()
            .map(|n| n.as_ref().trim().to_string())
            .filter(|n| !n.is_empty())
            .map(Member::new)
            .collect();
        Self { members }
    }

    /// Parse a comma-delimited list such as `"Ana, Bruno, Carlos"`
    pub fn parse(input: &str) -> Self {
        Self::from_names(input.split(','))
    }

    /// Number of entries in `input` that would be dropped as blank
    pub fn count_blank_entries(input: &str) -> usize {
        input.split(',').filter(|n| n.trim().is_empty()).count()
    }

    pub fn members(&self) -> &[Member] {
        &self.members
    }

    pub fn names(&self) -> Vec<&str> {
        self.members.iter().map(Member::name).collect()
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Names joined with `separator` (e.g. " | " for a status line)
    pub fn join(&self, separator: &str) -> String {
        self.names().join(separator)
    }
}

impl fmt::Display for Roster {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.join(", "))
    }
}
