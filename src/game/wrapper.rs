//! Single mutable game handle for any typestate phase.

use super::action::{MoveError, Mover, Seats};
use super::typestate::{GameFinished, GameInProgress, GameResult, GameSetup};
use tateti_core::{Board, Difficulty, Outcome, Position, RandomDraw, detect};
use tracing::{debug, instrument, warn};

/// Wraps whichever phase the game is in.
///
/// The UI owns one of these. Transitions replace the inner phase in place and
/// leave it untouched when a move is rejected.
#[derive(Debug, Clone)]
pub enum AnyGame {
    /// Not started yet.
    Setup(GameSetup),
    /// Accepting moves.
    InProgress(GameInProgress),
    /// Frozen with an outcome.
    Finished(GameFinished),
}

impl From<GameSetup> for AnyGame {
    fn from(game: GameSetup) -> Self {
        AnyGame::Setup(game)
    }
}

impl From<GameInProgress> for AnyGame {
    fn from(game: GameInProgress) -> Self {
        AnyGame::InProgress(game)
    }
}

impl From<GameFinished> for AnyGame {
    fn from(game: GameFinished) -> Self {
        AnyGame::Finished(game)
    }
}

impl From<GameResult> for AnyGame {
    fn from(result: GameResult) -> Self {
        match result {
            GameResult::InProgress(g) => g.into(),
            GameResult::Finished(g) => g.into(),
        }
    }
}

impl Default for AnyGame {
    fn default() -> Self {
        AnyGame::Setup(GameSetup::new())
    }
}

impl AnyGame {
    /// Returns the board for any game phase.
    pub fn board(&self) -> &Board {
        match self {
            AnyGame::Setup(g) => g.board(),
            AnyGame::InProgress(g) => g.board(),
            AnyGame::Finished(g) => g.board(),
        }
    }

    /// Returns the seats for any game phase.
    pub fn seats(&self) -> Seats {
        match self {
            AnyGame::Setup(g) => g.seats(),
            AnyGame::InProgress(g) => g.seats(),
            AnyGame::Finished(g) => g.seats(),
        }
    }

    /// Returns the board's outcome.
    pub fn outcome(&self) -> Outcome {
        match self {
            AnyGame::Finished(g) => *g.outcome(),
            other => detect(other.board()),
        }
    }

    /// Returns true if the game is over.
    pub fn is_over(&self) -> bool {
        matches!(self, AnyGame::Finished(_))
    }

    /// Returns who moves next, if the game is in progress.
    pub fn to_move(&self) -> Option<Mover> {
        match self {
            AnyGame::InProgress(g) => Some(g.to_move()),
            _ => None,
        }
    }

    /// Starts a fresh game with `first` to move, keeping the seats.
    #[instrument(skip(self))]
    pub fn restart(&mut self, first: Mover) {
        let seats = self.seats();
        debug!(?seats, "Restarting game");
        *self = GameSetup::with_seats(seats).start(first).into();
    }

    /// Claims `position` for the human.
    #[instrument(skip(self))]
    pub fn human_move(&mut self, position: Position) -> Result<(), MoveError> {
        self.transition(|game| game.apply_human_move(position))
    }

    /// Lets the computer move.
    #[instrument(skip(self, rng))]
    pub fn computer_move<R: RandomDraw + ?Sized>(
        &mut self,
        difficulty: Difficulty,
        rng: &mut R,
    ) -> Result<(), MoveError> {
        self.transition(|game| game.apply_computer_move(difficulty, rng))
    }

    fn transition(
        &mut self,
        step: impl FnOnce(GameInProgress) -> Result<GameResult, MoveError>,
    ) -> Result<(), MoveError> {
        let game = match self {
            AnyGame::InProgress(game) => game.clone(),
            AnyGame::Setup(_) => return Err(MoveError::NotStarted),
            AnyGame::Finished(_) => return Err(MoveError::GameOver),
        };

        match step(game) {
            Ok(result) => {
                *self = result.into();
                Ok(())
            }
            Err(e) => {
                warn!(error = %e, "Move rejected");
                Err(e)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tateti_core::{Player, ScriptedDraws, Square};

    #[test]
    fn test_rejected_move_keeps_state() {
        let mut game = AnyGame::default();
        assert_eq!(game.human_move(Position::Center), Err(MoveError::NotStarted));

        game.restart(Mover::Human);
        game.human_move(Position::Center).expect("legal move");
        assert_eq!(game.board().get(Position::Center), Square::Occupied(Player::X));

        assert_eq!(
            game.human_move(Position::TopLeft),
            Err(MoveError::WrongTurn(Mover::Human))
        );
        assert_eq!(game.to_move(), Some(Mover::Computer));
    }

    #[test]
    fn test_computer_reply_and_finish() {
        let mut game = AnyGame::default();
        game.restart(Mover::Computer);
        let mut draws = ScriptedDraws::default();

        game.computer_move(Difficulty::Pro, &mut draws).expect("computer moves");
        assert_eq!(game.board().get(Position::Center), Square::Occupied(Player::O));

        // Human blunders along the edges until the computer wins.
        for pos in [Position::TopCenter, Position::BottomCenter, Position::MiddleLeft] {
            if game.is_over() {
                break;
            }
            game.human_move(pos).expect("legal move");
            if !game.is_over() {
                game.computer_move(Difficulty::Pro, &mut draws).expect("computer moves");
            }
        }

        assert!(game.is_over());
        assert_eq!(game.outcome().winner(), Some(Player::O));
        assert_eq!(game.computer_move(Difficulty::Pro, &mut draws), Err(MoveError::GameOver));
    }
}
