//! Roster service
//!
//! Parses member input and replaces the stored roster.

use crate::audit::{roster_diff, EntityType};
use crate::error::{SplitError, SplitResult};
use crate::models::Roster;
use crate::storage::Storage;

/// Service for roster management
pub struct RosterService<'a> {
    storage: &'a Storage,
}

impl<'a> RosterService<'a> {
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Current roster, or `None` if members were never registered
    pub fn members(&self) -> SplitResult<Option<Roster>> {
        self.storage.roster.load()
    }

    /// Replace the roster from a comma-delimited list of names
    ///
    /// Blank entries are dropped. Input with no names at all is rejected and
    /// the stored roster is left as it was.
    pub fn set_members(&self, input: &str) -> SplitResult<Roster> {
        let blanks = Roster::count_blank_entries(input);
        let roster = Roster::parse(input);

        if roster.is_empty() {
            return Err(SplitError::Validation(
                "Enter at least one member name (separate names with commas)".into(),
            ));
        }
        if blanks > 0 {
            tracing::warn!(dropped = blanks, "ignoring blank member names");
        }

        self.replace(roster)
    }

    /// Replace the roster with an already-built list
    pub fn replace(&self, roster: Roster) -> SplitResult<Roster> {
        let before = self.storage.roster.load()?;
        self.storage.roster.replace_all(&roster)?;

        let diff = roster_diff(before.as_ref(), &roster);
        self.storage.log_replace(
            EntityType::Roster,
            format!("{} members", roster.len()),
            before.as_ref(),
            &roster,
            diff,
        );

        tracing::info!(members = roster.len(), "roster replaced");
        Ok(roster)
    }
}
