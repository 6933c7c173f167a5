//! History consistency invariant: history length matches occupied squares.

use super::super::GameInProgress;
use super::Invariant;
use tateti_core::Square;

/// Invariant: History length equals number of occupied squares.
pub struct HistoryConsistentInvariant;

impl Invariant<GameInProgress> for HistoryConsistentInvariant {
    fn holds(game: &GameInProgress) -> bool {
        let occupied = game
            .board()
            .squares()
            .iter()
            .filter(|s| **s != Square::Empty)
            .count();

        game.history().len() == occupied
    }

    fn description() -> &'static str {
        "History length matches number of occupied squares"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{GameResult, GameSetup, Mover};
    use tateti_core::{Player, Position};

    #[test]
    fn test_single_move_holds() {
        let game = GameSetup::new().start(Mover::Human);
        let Ok(GameResult::InProgress(game)) = game.apply_human_move(Position::Center) else {
            panic!("Expected in-progress game");
        };
        assert!(HistoryConsistentInvariant::holds(&game));
        assert_eq!(game.history().len(), 1);
    }

    #[test]
    fn test_untracked_square_violates() {
        let mut game = GameSetup::new().start(Mover::Human);
        game.board.set(Position::Center, Square::Occupied(Player::X));
        assert!(!HistoryConsistentInvariant::holds(&game));
    }
}
