//! Contact Assistant - Main entry point
//!
//! Starts the interactive command loop for managing contacts and birthdays.

use anyhow::Result;
use contact_assistant::Config;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let config = Config::from_env();

    // Logs go to stderr so they never mix with the conversation on stdout
    let fallback = config
        .as_ref()
        .map(|cfg| cfg.log_level.clone())
        .unwrap_or_else(|_| "error".to_string());
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&fallback))
        .unwrap_or_else(|_| EnvFilter::new("error"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let config = match config {
        Ok(cfg) => {
            info!("Configuration loaded successfully");
            cfg
        }
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    info!(
        window_days = config.birthday_window_days,
        today_override = ?config.today_override,
        "Starting contact assistant"
    );

    contact_assistant::repl::run(&config)?;

    info!("Contact assistant shutdown complete");
    Ok(())
}
