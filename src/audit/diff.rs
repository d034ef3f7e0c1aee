//! Diff generation for audit logging
//!
//! Roster replacements are the only wholesale updates, so the diff is a
//! list of names that appeared and disappeared.

use crate::models::Roster;

/// Summarize which members were added and removed between two rosters
///
/// Returns `None` when both rosters hold the same names in the same order.
pub fn roster_diff(before: Option<&Roster>, after: &Roster) -> Option<String> {
    let before_names = before.map(|r| r.names()).unwrap_or_default();
    let after_names = after.names();

    if before_names == after_names {
        return None;
    }

    let added: Vec<&str> = after_names
        .iter()
        .filter(|n| !before_names.contains(*n))
        .copied()
        .collect();
    let removed: Vec<&str> = before_names
        .iter()
        .filter(|n| !after_names.contains(*n))
        .copied()
        .collect();

    let mut changes = Vec::new();
    if !added.is_empty() {
        changes.push(format!("added: {}", added.join(", ")));
    }
    if !removed.is_empty() {
        changes.push(format!("removed: {}", removed.join(", ")));
    }
    if changes.is_empty() {
        changes.push("reordered".to_string());
    }

    Some(changes.join("; "))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_roster() {
        let after = Roster::from_names(["Ana", "Bruno"]);
        assert_eq!(roster_diff(None, &after), Some("added: Ana, Bruno".into()));
    }

    #[test]
    fn test_added_and_removed() {
        let before = Roster::from_names(["Ana", "Bruno"]);
        let after = Roster::from_names(["Ana", "Carlos"]);
        assert_eq!(
            roster_diff(Some(&before), &after),
            Some("added: Carlos; removed: Bruno".into())
        );
    }

    #[test]
    fn test_unchanged() {
        let roster = Roster::from_names(["Ana"]);
        assert_eq!(roster_diff(Some(&roster), &roster), None);
    }

    #[test]
    fn test_reordered() {
        let before = Roster::from_names(["Ana", "Bruno"]);
        let after = Roster::from_names(["Bruno", "Ana"]);
        assert_eq!(roster_diff(Some(&before), &after), Some("reordered".into()));
    }
}
