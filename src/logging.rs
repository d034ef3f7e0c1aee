//! Diagnostic logging
//!
//! Output goes to stderr so command output on stdout stays clean.
//! Priority: RUST_LOG > --verbose > settings `log_level` > "warn".

use tracing_subscriber::EnvFilter;

/// Filter used when nothing else selects a level
pub const DEFAULT_LOG_LEVEL: &str = "warn";

/// Initialise the logging subsystem
///
/// Safe to call more than once; later calls are ignored.
pub fn init(verbose: bool, config_level: Option<&str>) {
    let filter = if std::env::var_os("RUST_LOG").is_some() {
        EnvFilter::from_default_env()
    } else if verbose {
        EnvFilter::new("housesplit=debug")
    } else if let Some(level) = config_level {
        EnvFilter::new(level)
    } else {
        EnvFilter::new(DEFAULT_LOG_LEVEL)
    };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .try_init();

    tracing::debug!(version = env!("CARGO_PKG_VERSION"), "logging initialised");
}
