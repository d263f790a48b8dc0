mod config;
mod entry;
mod ledger;
mod logging;
mod models;
mod run;
mod summary;
mod ui;

use anyhow::Result;

use crate::logging::LogTarget;

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().collect();
    let config = config::Config::from_env();

    match args.len() {
        1 => {
            // The TUI owns the terminal; logs go to a file.
            let log_path = logging::init(&config, LogTarget::File)?;
            tracing::debug!(?log_path, currency = %config.currency_symbol, "logging to file");
            run::as_tui(&config)
        }
        2.. => {
            logging::init(&config, LogTarget::Stderr)?;
            run::as_cli(&args, &config)
        }
        _ => {
            eprintln!("Usage: spendtrack [command]");
            Ok(())
        }
    }
}
