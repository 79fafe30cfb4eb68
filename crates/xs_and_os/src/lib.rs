//! Xs and Os - pure game logic.
//!
//! The game is an immutable record transformed by actions. Rules are pure
//! predicates over that record, and the action stream is folded into a
//! stream of games for a view to render.
//!
//! # Architecture
//!
//! - **Types**: locations, players, play states, board and score maps
//! - **Lens**: composable getters and setters over immutable records
//! - **Game**: the game record and its lenses
//! - **Rules**: win and draw detection over fixed board paths
//! - **Action**: place, reset and forfeit transitions
//! - **Stream**: the action bus and the fold that turns it into games
//!
//! # Example
//!
//! ```
//! use xs_and_os::{Action, Game, Loc, Play, Player, Scalar};
//!
//! let game = [
//!     Action::Place(Loc::new(Scalar::A, Scalar::A)),
//!     Action::Forfeit,
//! ]
//! .iter()
//! .fold(Game::new(), |game, action| action.apply(game));
//!
//! assert_eq!(game.play(), Play::Won);
//! assert_eq!(game.score_of(Player::X), 1);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod game;
mod lens;
pub mod rules;
mod stream;
mod types;

pub use action::{Action, PlaceError, forfeit, place, reset, try_place, when_active};
pub use game::{
    BoardLens, Cell, Game, PlayLens, PlayerLens, ScoreLens, Tally, at, player_score,
    switch_player,
};
pub use lens::{Compose, Identity, Lens};
pub use stream::{ActionBus, ActionStream, BusClosed, bus, games};
pub use types::{Board, Loc, Play, Player, Scalar, Score, initial_score};
