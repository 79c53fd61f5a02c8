//! Contact Directory - Main entry point
//!
//! Opens the configured data file and runs the interactive menu on
//! stdin/stdout. Logs go to stderr.

use anyhow::{Context, Result};
use contact_directory::{Config, Console, ContactStore};
use std::io;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let config = Config::from_env().context("Failed to load configuration")?;

    // RUST_LOG wins over LOG_LEVEL
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    info!("Using contact file {}", config.contacts_file.display());

    let mut store = match ContactStore::open(&config.contacts_file) {
        Ok(store) => store,
        Err(e) => {
            error!("Failed to open contact store: {}", e);
            return Err(e.into());
        }
    };

    let stdin = io::stdin();
    let stdout = io::stdout();
    Console::new(&mut store, stdin.lock(), stdout.lock()).run()?;

    let summary = store.metrics().summary();
    info!(
        "Session complete: {} saves ({} failed), avg {:.1} ms",
        summary.saves_total, summary.save_errors_total, summary.save_duration_avg_ms
    );
    Ok(())
}
