//! Roster CLI commands

use clap::Subcommand;

use crate::display::format_roster;
use crate::error::SplitResult;
use crate::services::RosterService;
use crate::storage::Storage;

/// Roster subcommands
#[derive(Subcommand)]
pub enum RosterCommands {
    /// Replace the member list
    Set {
        /// Member names separated by commas (e.g. "Ana, Bruno, Carlos")
        names: String,
    },

    /// Show the registered members
    Show,
}

/// Handle a roster command
pub fn handle_roster_command(storage: &Storage, cmd: RosterCommands) -> SplitResult<()> {
    let service = RosterService::new(storage);

    match cmd {
        RosterCommands::Set { names } => {
            let roster = service.set_members(&names)?;
            println!("Members saved: {}", roster.join(", "));
        }

        RosterCommands::Show => {
            let roster = service.members()?;
            print!("{}", format_roster(roster.as_ref()));
        }
    }

    Ok(())
}
