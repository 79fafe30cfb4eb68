//! Draw detection for Xs and Os.

use crate::game::Game;
use crate::types::Loc;
use tracing::instrument;

/// Tests that every place on the board is occupied.
///
/// A full board with no winner is a draw.
#[instrument(skip(game))]
pub fn no_moves_left(game: &Game) -> bool {
    Loc::all().all(|loc| game.at(loc).is_some())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::at;
    use crate::lens::Lens;
    use crate::types::Player;

    #[test]
    fn test_empty_board_has_moves() {
        assert!(!no_moves_left(&Game::new()));
    }

    #[test]
    fn test_eight_marks_leave_a_move() {
        let game = Loc::all()
            .take(8)
            .fold(Game::new(), |g, loc| at(loc).set(g, Some(Player::X)));
        assert!(!no_moves_left(&game));
    }

    #[test]
    fn test_full_board() {
        let game = Loc::all()
            .enumerate()
            .fold(Game::new(), |g, (i, loc)| {
                let player = if i % 2 == 0 { Player::X } else { Player::O };
                at(loc).set(g, Some(player))
            });
        assert!(no_moves_left(&game));
    }
}
