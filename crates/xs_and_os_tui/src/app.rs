//! View state and the event loop that ties input, game stream and view together.

use crate::config::Theme;
use crate::input::{Intent, translate};
use crate::ui;
use anyhow::{Context, Result};
use crossterm::event::Event;
use futures::{Stream, StreamExt};
use ratatui::{Terminal, backend::Backend, layout::Rect};
use std::io;
use tracing::{debug, info, instrument};
use xs_and_os::{Game, Loc, Player, Scalar, bus, games};

/// View-local state: everything on screen that is not part of the game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewState {
    cursor: Loc,
    show_debug: bool,
    cells: Vec<(Loc, Rect)>,
}

impl ViewState {
    /// Creates a view with the cursor in the centre.
    pub fn new(show_debug: bool) -> Self {
        Self {
            cursor: Loc::new(Scalar::B, Scalar::B),
            show_debug,
            cells: Vec::new(),
        }
    }

    /// Returns the view with the cursor at `cursor`.
    pub fn with_cursor(self, cursor: Loc) -> Self {
        Self { cursor, ..self }
    }

    /// Location under the cursor.
    pub fn cursor(&self) -> Loc {
        self.cursor
    }

    /// Moves the cursor.
    pub fn set_cursor(&mut self, cursor: Loc) {
        self.cursor = cursor;
    }

    /// Whether the state panel is shown.
    pub fn show_debug(&self) -> bool {
        self.show_debug
    }

    /// Shows or hides the state panel.
    pub fn toggle_debug(&mut self) {
        self.show_debug = !self.show_debug;
    }

    /// Cell rectangles from the last frame, for mouse hit-testing.
    pub fn cells(&self) -> &[(Loc, Rect)] {
        &self.cells
    }

    /// Records the cell rectangles of a frame.
    pub fn set_cells(&mut self, cells: Vec<(Loc, Rect)>) {
        self.cells = cells;
    }
}

fn render<B: Backend>(
    terminal: &mut Terminal<B>,
    game: &Game,
    view: &mut ViewState,
    theme: &Theme,
) -> Result<()> {
    let mut cells = Vec::new();
    terminal
        .draw(|f| cells = ui::draw(f, game, &*view, theme))
        .map_err(|e| anyhow::anyhow!("Failed to draw frame: {}", e))?;
    view.set_cells(cells);
    Ok(())
}

/// Runs one session until the user quits or `events` ends.
///
/// Actions are pushed onto an action bus whose stream is folded into games;
/// every new game and every view change is rendered. Returns the last game.
#[instrument(skip_all)]
pub async fn run<B, E>(
    terminal: &mut Terminal<B>,
    events: E,
    theme: Theme,
    show_debug: bool,
) -> Result<Game>
where
    B: Backend,
    E: Stream<Item = io::Result<Event>>,
{
    let (bus, actions) = bus();
    let mut game_stream = Box::pin(games(Game::new(), actions));
    let mut events = Box::pin(events);

    let mut game = Game::new();
    let mut view = ViewState::new(show_debug);
    render(terminal, &game, &mut view, &theme)?;

    info!("Session started");

    loop {
        tokio::select! {
            biased;

            Some(next) = game_stream.next() => {
                game = next;
            }
            event = events.next() => {
                let Some(event) = event else {
                    info!("Input closed");
                    break;
                };
                let event = event.context("Failed to read terminal event")?;

                match translate(&event, &view) {
                    Some(Intent::Act(action)) => {
                        debug!(%action, "Pushing action");
                        bus.push(action)?;
                        continue;
                    }
                    Some(Intent::Cursor(loc)) => view.set_cursor(loc),
                    Some(Intent::ToggleDebug) => view.toggle_debug(),
                    Some(Intent::Redraw) => {}
                    Some(Intent::Quit) => {
                        info!("User quit");
                        break;
                    }
                    None => continue,
                }
            }
        }

        render(terminal, &game, &mut view, &theme)?;
    }

    // Let actions already on the bus land before reporting the final game.
    drop(bus);
    while let Some(next) = game_stream.next().await {
        game = next;
    }

    info!(
        x = game.score_of(Player::X),
        o = game.score_of(Player::O),
        "Session ended"
    );
    Ok(game)
}
