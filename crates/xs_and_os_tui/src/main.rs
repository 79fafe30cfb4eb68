//! Xs and Os - terminal client
//!
//! Loads configuration, sets up file logging, and runs the game.

#![warn(missing_docs)]

use anyhow::{Context, Result};
use clap::Parser;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;
use xs_and_os::Player;
use xs_and_os_tui::{Cli, Config, run_tui};

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let mut config = Config::load_or_default(&cli.config)?.with_show_debug(cli.debug);
    if let Some(log_file) = cli.log_file {
        config = config.with_log_file(log_file);
    }

    init_tracing(&config)?;
    info!(
        source = %config.source(),
        log_file = %config.log_file().display(),
        log_filter = %config.log_filter(),
        show_debug = *config.show_debug(),
        "Configuration loaded"
    );

    let theme = config.theme().resolve()?;
    let game = run_tui(theme, *config.show_debug()).await?;

    println!(
        "Final score  X: {}  O: {}",
        game.score_of(Player::X),
        game.score_of(Player::O)
    );
    Ok(())
}

/// Sends tracing output to the log file so it does not interfere with the TUI.
fn init_tracing(config: &Config) -> Result<()> {
    let log_file = std::fs::File::create(config.log_file()).with_context(|| {
        format!("Failed to create log file {}", config.log_file().display())
    })?;

    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.log_filter())),
        )
        .with_writer(Arc::new(log_file))
        .with_ansi(false)
        .try_init();

    Ok(())
}
