//! Game rules for Xs and Os.
//!
//! Pure predicates over a game record. Rules never change state; the action
//! module decides what to do with their answers.

pub mod draw;
pub mod win;

pub use draw::no_moves_left;
pub use win::{WINNING_PATHS, winner, winning_path, winning_state};

use crate::game::Game;
use crate::types::Play;
use tracing::instrument;

/// Determines the play state a game should be in.
///
/// A completed path wins even on a full board; otherwise a full board is a
/// draw, and anything else keeps the game's current play value.
#[instrument(skip(game), fields(play = ?game.play()))]
pub fn check_state(game: &Game) -> Play {
    if winning_state(game) {
        Play::Won
    } else if no_moves_left(game) {
        Play::Draw
    } else {
        game.play()
    }
}
