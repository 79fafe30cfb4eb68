//! Terminal UI for Xs and Os.
//!
//! Renders the game with ratatui and feeds keyboard and mouse input into the
//! action bus of the `xs_and_os` crate.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod app;
mod cli;
mod config;
mod input;
mod terminal;
mod ui;

pub use app::{ViewState, run};
pub use cli::Cli;
pub use config::{Config, ConfigError, ConfigSource, Theme, ThemeConfig};
pub use input::{Intent, move_cursor, translate};
pub use ui::{ScreenLayout, draw, grid_cells, screen_layout, status_text};

use anyhow::Result;
use crossterm::event::EventStream;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use tracing::{error, info};
use xs_and_os::Game;

/// Takes over the terminal, plays until the user quits, and restores it.
///
/// The terminal is restored on every exit path, including a failure while
/// setting it up.
pub async fn run_tui(theme: Theme, show_debug: bool) -> Result<Game> {
    info!("Starting Xs and Os TUI");

    let guard = terminal::take_over()?;
    let mut terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;

    let res = run(&mut terminal, EventStream::new(), theme, show_debug).await;
    drop(guard);

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }

    res
}
