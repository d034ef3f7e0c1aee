//! CLI commands for data export

use std::path::PathBuf;

use clap::{Subcommand, ValueEnum};

use crate::error::{SplitError, SplitResult};
use crate::export::{csv, json, yaml};
use crate::storage::{write_bytes_atomic, Storage};

/// Export format options
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ExportFormat {
    /// CSV format (ledger only)
    Csv,
    /// JSON format (roster, ledger and statistics)
    Json,
    /// YAML format (roster, ledger and statistics, human-readable)
    Yaml,
}

/// Export subcommands
#[derive(Subcommand, Debug)]
pub enum ExportCommands {
    /// Export all data to a file
    All {
        /// Output file path
        output: PathBuf,

        /// Export format
        #[arg(short, long, value_enum, default_value = "json")]
        format: ExportFormat,

        /// Pretty-print JSON output
        #[arg(long)]
        pretty: bool,
    },
}

/// Handle export commands
pub fn handle_export_command(storage: &Storage, cmd: ExportCommands) -> SplitResult<()> {
    match cmd {
        ExportCommands::All {
            output,
            format,
            pretty,
        } => handle_export_all(storage, output, format, pretty),
    }
}

fn handle_export_all(
    storage: &Storage,
    output: PathBuf,
    format: ExportFormat,
    pretty: bool,
) -> SplitResult<()> {
    // Nothing touches the output path until the export has rendered
    let mut buffer = Vec::new();
    let count = match format {
        ExportFormat::Csv => Some(csv::export_ledger_csv(storage, &mut buffer)?),
        ExportFormat::Json => {
            json::export_full_json(storage, &mut buffer, pretty)?;
            None
        }
        ExportFormat::Yaml => {
            yaml::export_full_yaml(storage, &mut buffer)?;
            None
        }
    };

    write_bytes_atomic(&output, &buffer).map_err(|e| {
        SplitError::Export(format!("Failed to write {}: {}", output.display(), e))
    })?;

    match count {
        Some(count) => {
            println!("Exported {} expense(s) to: {}", count, output.display());
            println!("Note: CSV format exports the ledger only. Use JSON or YAML for a full export.");
        }
        None => println!("Full export written to: {}", output.display()),
    }

    tracing::info!(path = %output.display(), ?format, "export written");
    Ok(())
}
