//! Command-line interface for xs_and_os.

use clap::Parser;
use std::path::PathBuf;

/// Xs and Os - tic-tac-toe in the terminal
#[derive(Parser, Debug)]
#[command(name = "xs-and-os")]
#[command(about = "Play Xs and Os in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML config file (optional)
    #[arg(short, long, default_value = "xs_and_os.toml")]
    pub config: PathBuf,

    /// Show the state panel on startup
    #[arg(short, long)]
    pub debug: bool,

    /// Write logs here instead of the configured file
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}
