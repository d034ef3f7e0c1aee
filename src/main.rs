use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use housesplit::cli::{
    handle_audit_command, handle_expense_command, handle_export_command, handle_report_command,
    handle_roster_command, handle_split_command, ExpenseCommands, ExportCommands, ReportCommands,
    RosterCommands,
};
use housesplit::config::paths::{HousesplitPaths, DATA_DIR_ENV};
use housesplit::config::settings::Settings;
use housesplit::models::Month;
use housesplit::storage::{initialize_storage, Storage};

#[derive(Parser)]
#[command(
    name = "housesplit",
    author = "Kaylee Beyene",
    version,
    about = "Split shared household bills evenly",
    long_about = "housesplit keeps a list of household members and a ledger of \
                  monthly bills, and tells you how much each member owes."
)]
struct Cli {
    /// Directory holding settings, data files and the audit log
    #[arg(long, global = true, env = DATA_DIR_ENV)]
    data_dir: Option<PathBuf>,

    /// Enable debug logging on stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Household member management
    #[command(subcommand, alias = "members")]
    Roster(RosterCommands),

    /// Expense management
    #[command(subcommand, alias = "bill")]
    Expense(ExpenseCommands),

    /// Show what each member owes for a month
    Split {
        /// Month (YYYY-MM or MM-YYYY); defaults to the latest month recorded
        month: Option<Month>,
    },

    /// Spending statistics and charts
    #[command(subcommand)]
    Report(ReportCommands),

    /// Export data to a file
    #[command(subcommand)]
    Export(ExportCommands),

    /// Show recent audit log entries
    Audit {
        /// Number of entries to show
        #[arg(short, long, default_value = "20")]
        limit: usize,
    },

    /// Initialize the data directory
    Init,

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = match cli.data_dir {
        Some(dir) => HousesplitPaths::with_base_dir(dir),
        None => HousesplitPaths::new()?,
    };
    let settings = Settings::load_or_create(&paths)?;

    housesplit::logging::init(cli.verbose, settings.log_level.as_deref());

    let storage = Storage::new(paths.clone())?;
    let storage = if settings.audit_enabled {
        storage
    } else {
        storage.without_audit()
    };

    match cli.command {
        Some(Commands::Roster(cmd)) => handle_roster_command(&storage, cmd)?,
        Some(Commands::Expense(cmd)) => handle_expense_command(&storage, &settings, cmd)?,
        Some(Commands::Split { month }) => handle_split_command(&storage, &settings, month)?,
        Some(Commands::Report(cmd)) => handle_report_command(&storage, &settings, cmd)?,
        Some(Commands::Export(cmd)) => handle_export_command(&storage, cmd)?,
        Some(Commands::Audit { limit }) => handle_audit_command(&storage, limit)?,
        Some(Commands::Init) => {
            println!("Initializing housesplit at: {}", paths.base_dir().display());
            let outcome = initialize_storage(&paths, &settings)?;
            if !outcome.created_settings && !outcome.created_ledger {
                println!("Already initialized. Existing files were left as they were.");
            } else {
                println!("Initialization complete!");
            }
            println!();
            println!("Next, register the household members:");
            println!("  housesplit roster set \"Ana, Bruno, Carlos\"");
        }
        Some(Commands::Config) => {
            println!("housesplit Configuration");
            println!("========================");
            println!("Base directory:   {}", paths.base_dir().display());
            println!("Settings file:    {}", paths.settings_file().display());
            println!("Roster file:      {}", paths.roster_file().display());
            println!("Ledger file:      {}", paths.ledger_file().display());
            println!("Audit log:        {}", paths.audit_log().display());
            println!();
            println!("Settings:");
            println!("  Currency symbol:    {}", settings.currency.symbol);
            println!("  Decimal separator:  {}", settings.currency.decimal_separator);
            println!("  Grouping separator: {}", settings.currency.grouping_separator);
            println!("  Categories:         {}", settings.categories.len());
            println!(
                "  Log level:          {}",
                settings.log_level.as_deref().unwrap_or("(default)")
            );
            println!("  Audit enabled:      {}", settings.audit_enabled);
        }
        None => {
            println!("housesplit - split shared household bills");
            println!();
            println!("Run 'housesplit --help' for usage information.");
        }
    }

    Ok(())
}
