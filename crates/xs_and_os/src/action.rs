//! Actions: the transitions of the game state machine.
//!
//! An action is a pure function from one game to the next. Actions are
//! values so they can be logged, compared and pushed through the action
//! bus; [`Action::apply`] runs one.

use crate::game::{Game, PlayLens, PlayerLens, ScoreLens, at, player_score, switch_player};
use crate::lens::Lens;
use crate::rules::check_state;
use crate::types::{Loc, Play, Player};
use tracing::{debug, info, instrument};

/// A user intent that transforms the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    /// Place the current player at a location.
    Place(Loc),
    /// Start a new game, keeping the score.
    Reset,
    /// The current player gives up; the opponent wins.
    Forfeit,
}

impl Action {
    /// Place action for a keypad index (0-8).
    pub fn place_index(index: usize) -> Option<Self> {
        Loc::from_index(index).map(Action::Place)
    }

    /// Runs this action against `game`.
    #[instrument(skip(game), fields(play = ?game.play(), player = ?game.player()))]
    pub fn apply(&self, game: Game) -> Game {
        match *self {
            Action::Place(loc) => place(game, loc),
            Action::Reset => reset(game),
            Action::Forfeit => forfeit(game),
        }
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Action::Place(loc) => write!(f, "place {}", loc),
            Action::Reset => write!(f, "reset"),
            Action::Forfeit => write!(f, "forfeit"),
        }
    }
}

/// Why a placement could not be made.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum PlaceError {
    /// The game is no longer active.
    #[display("Game is already over")]
    GameOver,

    /// Someone already holds the location.
    #[display("Square {} is already occupied", _0)]
    Occupied(#[error(not(source))] Loc),
}

/// Applies `f` only while the game is active; otherwise returns the game unchanged.
pub fn when_active<F>(game: Game, f: F) -> Game
where
    F: FnOnce(Game) -> Game,
{
    if game.is_active() { f(game) } else { game }
}

/// Places the current player at `loc`, or explains why that is not possible.
///
/// After the placement the play state is recomputed. While the game stays
/// active the turn passes to the other player. When it ends the player is
/// left in place, and a win adds a point to their score.
#[instrument(skip(game))]
pub fn try_place(game: Game, loc: Loc) -> Result<Game, PlaceError> {
    if !game.is_active() {
        return Err(PlaceError::GameOver);
    }
    if game.at(loc).is_some() {
        return Err(PlaceError::Occupied(loc));
    }

    let player = game.player();
    let game = at(loc).set(game, Some(player));

    match check_state(&game) {
        Play::Active => Ok(switch_player(game)),
        Play::Won => {
            info!(%player, "Game won");
            Ok(inc_score(PlayLens.set(game, Play::Won), player))
        }
        Play::Draw => {
            info!("Game drawn");
            Ok(PlayLens.set(game, Play::Draw))
        }
    }
}

/// Places the current player at `loc`. Illegal placements leave the game unchanged.
pub fn place(game: Game, loc: Loc) -> Game {
    match try_place(game.clone(), loc) {
        Ok(next) => next,
        Err(e) => {
            debug!(error = %e, "Placement ignored");
            game
        }
    }
}

/// Starts over with a fresh game, carrying the score across.
#[instrument(skip(game))]
pub fn reset(game: Game) -> Game {
    ScoreLens.set(Game::new(), ScoreLens.get(&game))
}

/// Ends an active game in favour of the player who is not to move.
#[instrument(skip(game))]
pub fn forfeit(game: Game) -> Game {
    when_active(game, |game| {
        let game = switch_player(game);
        let winner = PlayerLens.get(&game);
        info!(%winner, "Game forfeited");
        inc_score(PlayLens.set(game, Play::Won), winner)
    })
}

fn inc_score(game: Game, player: Player) -> Game {
    player_score(player).modify(game, |n| n + 1)
}
