//! Win detection for Xs and Os.

use crate::game::Game;
use crate::types::{Board, Loc, Player, Scalar};
use tracing::instrument;

const fn loc(col: Scalar, row: Scalar) -> Loc {
    Loc::new(col, row)
}

/// Every path through the board that wins when held by one player.
pub const WINNING_PATHS: [[Loc; 3]; 8] = {
    use Scalar::*;
    [
        // Diagonals
        [loc(A, A), loc(B, B), loc(C, C)],
        [loc(C, A), loc(B, B), loc(A, C)],
        // Verticals
        [loc(A, A), loc(A, B), loc(A, C)],
        [loc(B, A), loc(B, B), loc(B, C)],
        [loc(C, A), loc(C, B), loc(C, C)],
        // Horizontals
        [loc(A, A), loc(B, A), loc(C, A)],
        [loc(A, B), loc(B, B), loc(C, B)],
        [loc(A, C), loc(B, C), loc(C, C)],
    ]
};

/// Player holding every location in `path`, if one does.
fn path_owner(board: &Board, path: &[Loc]) -> Option<Player> {
    let (first, rest) = path.split_first()?;
    let owner = *board.get(first)?;
    rest.iter()
        .all(|loc| board.get(loc) == Some(&owner))
        .then_some(owner)
}

/// Tests that `path` is occupied throughout by the same player.
pub fn winning_path(game: &Game, path: &[Loc]) -> bool {
    path_owner(game.board(), path).is_some()
}

/// Tests that at least one winning path is held by a single player.
#[instrument(skip(game))]
pub fn winning_state(game: &Game) -> bool {
    WINNING_PATHS.iter().any(|path| winning_path(game, path))
}

/// Returns the player holding a winning path, if any.
#[instrument(skip(board))]
pub fn winner(board: &Board) -> Option<Player> {
    WINNING_PATHS
        .iter()
        .find_map(|path| path_owner(board, path))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::at;
    use crate::lens::Lens;
    use Scalar::*;

    fn place(game: Game, marks: &[(Scalar, Scalar)], player: Player) -> Game {
        marks
            .iter()
            .fold(game, |g, &(c, r)| at(loc(c, r)).set(g, Some(player)))
    }

    #[test]
    fn test_no_winner_empty_board() {
        let game = Game::new();
        assert!(!winning_state(&game));
        assert_eq!(winner(game.board()), None);
    }

    #[test]
    fn test_winner_top_row() {
        let game = place(Game::new(), &[(A, A), (B, A), (C, A)], Player::X);
        assert!(winning_state(&game));
        assert_eq!(winner(game.board()), Some(Player::X));
    }

    #[test]
    fn test_winner_anti_diagonal() {
        let game = place(Game::new(), &[(C, A), (B, B), (A, C)], Player::O);
        assert!(winning_path(&game, &WINNING_PATHS[1]));
        assert_eq!(winner(game.board()), Some(Player::O));
    }

    #[test]
    fn test_winner_column() {
        let game = place(Game::new(), &[(B, A), (B, B), (B, C)], Player::O);
        assert_eq!(winner(game.board()), Some(Player::O));
    }

    #[test]
    fn test_mixed_path_does_not_win() {
        let game = place(Game::new(), &[(A, A), (B, A)], Player::X);
        let game = place(game, &[(C, A)], Player::O);
        assert!(!winning_state(&game));
    }

    #[test]
    fn test_incomplete_path_does_not_win() {
        let game = place(Game::new(), &[(A, A), (B, B)], Player::X);
        assert!(!winning_state(&game));
    }

    #[test]
    fn test_empty_path_never_wins() {
        assert!(!winning_path(&Game::new(), &[]));
    }

    #[test]
    fn test_every_path_is_distinct() {
        for (i, a) in WINNING_PATHS.iter().enumerate() {
            for b in &WINNING_PATHS[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }
}
