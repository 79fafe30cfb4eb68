//! The immutable game record and the lenses that reach into it.

use crate::lens::{Compose, Lens};
use crate::types::{Board, Loc, Play, Player, Score, initial_score};
use serde::Serialize;
use tracing::instrument;

/// Complete state of a game session.
///
/// Cloning is cheap: the board and score are persistent maps that share
/// structure between versions, so every transition returns a new `Game`
/// instead of mutating one in place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Game {
    player: Player,
    play: Play,
    board: Board,
    score: Score,
}

impl Game {
    /// Creates the default game: X to go, play active, empty board, zero scores.
    #[instrument]
    pub fn new() -> Self {
        Self {
            player: Player::X,
            play: Play::Active,
            board: Board::new(),
            score: initial_score(),
        }
    }

    /// Player to move, or the winner once play is [`Play::Won`].
    pub fn player(&self) -> Player {
        self.player
    }

    /// Current phase of the game.
    pub fn play(&self) -> Play {
        self.play
    }

    /// The board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Win counts.
    pub fn score(&self) -> &Score {
        &self.score
    }

    /// Player occupying `loc`, if any.
    pub fn at(&self, loc: Loc) -> Option<Player> {
        self.board.get(&loc).copied()
    }

    /// Win count for `player`.
    pub fn score_of(&self, player: Player) -> u32 {
        self.score.get(&player).copied().unwrap_or(0)
    }

    /// Whether moves can still be made.
    pub fn is_active(&self) -> bool {
        self.play == Play::Active
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

/// Hands the turn to the other player.
pub fn switch_player(game: Game) -> Game {
    PlayerLens.modify(game, Player::other)
}

/// Focuses on [`Game::player`].
#[derive(Debug, Clone, Copy)]
pub struct PlayerLens;

impl Lens<Game> for PlayerLens {
    type Target = Player;

    fn get(&self, game: &Game) -> Player {
        game.player
    }

    fn set(&self, game: Game, player: Player) -> Game {
        Game { player, ..game }
    }
}

/// Focuses on [`Game::play`].
#[derive(Debug, Clone, Copy)]
pub struct PlayLens;

impl Lens<Game> for PlayLens {
    type Target = Play;

    fn get(&self, game: &Game) -> Play {
        game.play
    }

    fn set(&self, game: Game, play: Play) -> Game {
        Game { play, ..game }
    }
}

/// Focuses on [`Game::board`].
#[derive(Debug, Clone, Copy)]
pub struct BoardLens;

impl Lens<Game> for BoardLens {
    type Target = Board;

    fn get(&self, game: &Game) -> Board {
        game.board.clone()
    }

    fn set(&self, game: Game, board: Board) -> Game {
        Game { board, ..game }
    }
}

/// Focuses on [`Game::score`].
#[derive(Debug, Clone, Copy)]
pub struct ScoreLens;

impl Lens<Game> for ScoreLens {
    type Target = Score;

    fn get(&self, game: &Game) -> Score {
        game.score.clone()
    }

    fn set(&self, game: Game, score: Score) -> Game {
        Game { score, ..game }
    }
}

/// Focuses on one cell of a board. Setting `None` empties the cell.
#[derive(Debug, Clone, Copy)]
pub struct Cell(pub Loc);

impl Lens<Board> for Cell {
    type Target = Option<Player>;

    fn get(&self, board: &Board) -> Option<Player> {
        board.get(&self.0).copied()
    }

    fn set(&self, board: Board, value: Option<Player>) -> Board {
        match value {
            Some(player) => board.update(self.0, player),
            None => board.without(&self.0),
        }
    }
}

/// Focuses on one player's count in a score.
#[derive(Debug, Clone, Copy)]
pub struct Tally(pub Player);

impl Lens<Score> for Tally {
    type Target = u32;

    fn get(&self, score: &Score) -> u32 {
        score.get(&self.0).copied().unwrap_or(0)
    }

    fn set(&self, score: Score, value: u32) -> Score {
        score.update(self.0, value)
    }
}

/// Lens from a game to the occupant of `loc`.
pub fn at(loc: Loc) -> Compose<BoardLens, Cell> {
    BoardLens.then(Cell(loc))
}

/// Lens from a game to `player`'s win count.
pub fn player_score(player: Player) -> Compose<ScoreLens, Tally> {
    ScoreLens.then(Tally(player))
}
