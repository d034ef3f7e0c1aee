//! Roster repository for CSV storage
//!
//! Manages loading and replacing the member list in integrantes.csv.
//! Every call goes to disk; nothing is cached between operations.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::SplitError;
use crate::models::Roster;

use super::file_io::{read_csv, write_csv_atomic};

/// Column header of the roster file
pub const ROSTER_HEADER: &str = "Integrantes";

/// One row of integrantes.csv
#[derive(Debug, Clone, Serialize, Deserialize)]
struct MemberRow {
    #[serde(rename = "Integrantes")]
    name: String,
}

/// Repository for roster persistence
pub struct RosterRepository {
    path: PathBuf,
}

impl RosterRepository {
    /// Create a new roster repository
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }

    /// Load the roster, or `None` if no roster has ever been saved
    pub fn load(&self) -> Result<Option<Roster>, SplitError> {
        let rows: Option<Vec<MemberRow>> = read_csv(&self.path)?;
        Ok(rows.map(|rows| Roster::from_names(rows.iter().map(|r| r.name.as_str()))))
    }

    /// Replace the stored roster with `roster`
    pub fn replace_all(&self, roster: &Roster) -> Result<(), SplitError> {
        let rows: Vec<MemberRow> = roster
            .members()
            .iter()
            .map(|m| MemberRow {
                name: m.name().to_string(),
            })
            .collect();

        write_csv_atomic(&self.path, &[ROSTER_HEADER], &rows)?;
        tracing::debug!(path = %self.path.display(), members = rows.len(), "roster written");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn create_test_repo() -> (TempDir, RosterRepository) {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("integrantes.csv");
        (temp_dir, RosterRepository::new(path))
    }

    #[test]
    fn test_missing_file_is_none() {
        let (_temp_dir, repo) = create_test_repo();
        assert!(repo.load().unwrap().is_none());
    }

    #[test]
    fn test_replace_and_load() {
        let (_temp_dir, repo) = create_test_repo();

        repo.replace_all(&Roster::from_names(["Ana", "Bruno", "Carlos"]))
            .unwrap();

        let roster = repo.load().unwrap().unwrap();
        assert_eq!(roster.names(), vec!["Ana", "Bruno", "Carlos"]);
    }

    #[test]
    fn test_replace_overwrites_previous() {
        let (_temp_dir, repo) = create_test_repo();

        repo.replace_all(&Roster::from_names(["Ana", "Bruno"])).unwrap();
        repo.replace_all(&Roster::from_names(["Carlos"])).unwrap();

        let roster = repo.load().unwrap().unwrap();
        assert_eq!(roster.names(), vec!["Carlos"]);
    }

    #[test]
    fn test_one_member_roster_is_distinct_from_missing() {
        let (_temp_dir, repo) = create_test_repo();
        repo.replace_all(&Roster::from_names(["Ana"])).unwrap();

        let roster = repo.load().unwrap();
        assert_eq!(roster.map(|r| r.len()), Some(1));
    }

    #[test]
    fn test_file_format() {
        let (_temp_dir, repo) = create_test_repo();
        repo.replace_all(&Roster::from_names(["Ana", "João"])).unwrap();

        let text = fs::read_to_string(repo.path()).unwrap();
        assert_eq!(text, "Integrantes\nAna\nJoão\n");
    }

    #[test]
    fn test_header_only_file_is_empty_roster() {
        let (_temp_dir, repo) = create_test_repo();
        fs::write(repo.path(), "Integrantes\n").unwrap();

        let roster = repo.load().unwrap().unwrap();
        assert!(roster.is_empty());
    }
}
