//! Tic-tac-toe in the terminal.
//!
//! Two players on one keyboard, or one player against a heuristic
//! computer opponent.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod config;
mod tui;

use anyhow::{Context, Result};
use clap::Parser;
use cli::Cli;
use config::AppConfig;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = load_config(&cli)?;

    init_tracing(&config)?;
    info!(mode = ?cli.mode, "Starting tic-tac-toe");

    tui::run_tui(&config, cli.mode.map(Into::into))
}

/// Reads the config file and applies command-line overrides.
fn load_config(cli: &Cli) -> Result<AppConfig> {
    let mut config = AppConfig::load_or_default(&cli.config)?;
    if let Some(ms) = cli.ai_delay_ms {
        config = config.with_ai_delay_ms(ms);
    }
    if let Some(theme) = cli.theme {
        config = config.with_theme(theme);
    }
    if let Some(path) = &cli.log_file {
        config = config.with_log_file(path.clone());
    }
    Ok(config)
}

/// Logs to a file so output does not interfere with the TUI.
fn init_tracing(config: &AppConfig) -> Result<()> {
    let log_file = std::fs::File::create(config.log_file())
        .with_context(|| format!("Failed to create log file {}", config.log_file().display()))?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init();
    Ok(())
}
