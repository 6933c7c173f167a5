//! Alternating turn invariant: human and computer take turns.

use super::super::GameInProgress;
use super::Invariant;

/// Invariant: Movers alternate, starting with the configured first mover.
pub struct AlternatingTurnInvariant;

impl Invariant<GameInProgress> for AlternatingTurnInvariant {
    fn holds(game: &GameInProgress) -> bool {
        let history = game.history();

        if let Some(first) = history.first()
            && first.mover != game.first()
        {
            return false;
        }

        if history.windows(2).any(|w| w[0].mover == w[1].mover) {
            return false;
        }

        let expected_next = if history.len() % 2 == 0 {
            game.first()
        } else {
            game.first().other()
        };

        game.to_move() == expected_next
    }

    fn description() -> &'static str {
        "Human and computer alternate turns"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{GameInProgress, GameResult, GameSetup, Move, Mover, Seats};
    use tateti_core::Position;

    #[test]
    fn test_computer_first_holds() {
        let game = GameSetup::new().start(Mover::Computer);
        assert!(AlternatingTurnInvariant::holds(&game));
        assert_eq!(game.to_move(), Mover::Computer);
    }

    #[test]
    fn test_replayed_game_holds() {
        let moves = [
            Move::new(Mover::Computer, Position::Center),
            Move::new(Mover::Human, Position::TopLeft),
        ];
        let Ok(GameResult::InProgress(game)) =
            GameInProgress::replay(Seats::default(), Mover::Computer, &moves)
        else {
            panic!("Expected in-progress game");
        };
        assert!(AlternatingTurnInvariant::holds(&game));
    }

    #[test]
    fn test_double_move_violates() {
        let game = GameSetup::new().start(Mover::Human);
        let Ok(GameResult::InProgress(mut game)) = game.apply_human_move(Position::Center) else {
            panic!("Expected in-progress game");
        };
        game.history.push(Move::new(Mover::Human, Position::TopLeft));
        assert!(!AlternatingTurnInvariant::holds(&game));
    }
}
