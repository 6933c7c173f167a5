//! Phase-specific typestate structs for a human-versus-computer game.
//!
//! Each phase is its own type. A `GameFinished` always carries a terminal
//! outcome, and only a `GameInProgress` accepts moves.

use super::action::{Move, MoveError, Mover, Seats};
use super::contracts::{Contract, MoveContract};
use tateti_core::{Board, Difficulty, Line, Outcome, Position, RandomDraw, Square, detect, select_move};
use tracing::{debug, info, instrument};

// ─────────────────────────────────────────────────────────────
//  Setup Phase
// ─────────────────────────────────────────────────────────────

/// Game in setup phase - ready to start.
///
/// The board is always empty.
#[derive(Debug, Clone)]
pub struct GameSetup {
    board: Board,
    seats: Seats,
}

impl GameSetup {
    /// Creates a new game with the human on X and the computer on O.
    #[instrument]
    pub fn new() -> Self {
        Self::with_seats(Seats::default())
    }

    /// Creates a new game with the given seats.
    pub fn with_seats(seats: Seats) -> Self {
        Self {
            board: Board::new(),
            seats,
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the seats.
    pub fn seats(&self) -> Seats {
        self.seats
    }

    /// Starts the game with `first` to move.
    #[instrument(skip(self))]
    pub fn start(self, first: Mover) -> GameInProgress {
        info!(%first, "Game started");
        GameInProgress {
            board: self.board,
            history: Vec::new(),
            to_move: first,
            first,
            seats: self.seats,
        }
    }
}

impl Default for GameSetup {
    fn default() -> Self {
        Self::new()
    }
}

// ─────────────────────────────────────────────────────────────
//  InProgress Phase
// ─────────────────────────────────────────────────────────────

/// Game in progress - can accept moves.
#[derive(Debug, Clone)]
pub struct GameInProgress {
    pub(super) board: Board,
    pub(super) history: Vec<Move>,
    pub(super) to_move: Mover,
    pub(super) first: Mover,
    pub(super) seats: Seats,
}

impl GameInProgress {
    /// Makes a move, consuming self and transitioning to the next state.
    ///
    /// Preconditions are always checked; postconditions only in debug builds.
    #[instrument(skip(self), fields(board = %self.board))]
    pub fn make_move(self, action: Move) -> Result<GameResult, MoveError> {
        #[cfg(debug_assertions)]
        let before = self.clone();

        MoveContract::pre(&self, &action)?;

        let mut game = self;
        let mark = game.seats.mark(action.mover);
        game.board.set(action.position, Square::Occupied(mark));
        game.history.push(action);
        debug!(%action, %mark, "Move applied");

        game.to_move = game.to_move.other();

        #[cfg(debug_assertions)]
        MoveContract::post(&before, &game)?;

        let outcome = detect(&game.board);
        if outcome.is_terminal() {
            info!(%outcome, "Game finished");
            return Ok(GameResult::Finished(GameFinished {
                board: game.board,
                history: game.history,
                outcome,
                seats: game.seats,
                first: game.first,
            }));
        }

        Ok(GameResult::InProgress(game))
    }

    /// Claims `position` for the human.
    #[instrument(skip(self))]
    pub fn apply_human_move(self, position: Position) -> Result<GameResult, MoveError> {
        self.make_move(Move::new(Mover::Human, position))
    }

    /// Lets the computer choose and claim a square.
    #[instrument(skip(self, rng))]
    pub fn apply_computer_move<R: RandomDraw + ?Sized>(
        self,
        difficulty: Difficulty,
        rng: &mut R,
    ) -> Result<GameResult, MoveError> {
        if self.to_move != Mover::Computer {
            return Err(MoveError::WrongTurn(Mover::Computer));
        }
        let position = select_move(&self.board, self.seats.computer, difficulty, rng)
            .ok_or(MoveError::NoMoveAvailable)?;
        self.make_move(Move::new(Mover::Computer, position))
    }

    /// Returns who moves next.
    pub fn to_move(&self) -> Mover {
        self.to_move
    }

    /// Returns who moved first.
    pub fn first(&self) -> Mover {
        self.first
    }

    /// Returns the seats.
    pub fn seats(&self) -> Seats {
        self.seats
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns move history.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Returns valid positions.
    pub fn valid_moves(&self) -> Vec<Position> {
        self.board.empty_positions()
    }

    /// Replays moves from an empty board.
    #[instrument]
    pub fn replay(seats: Seats, first: Mover, moves: &[Move]) -> Result<GameResult, MoveError> {
        let mut game = GameSetup::with_seats(seats).start(first);

        for action in moves {
            match game.make_move(*action)? {
                GameResult::InProgress(g) => game = g,
                GameResult::Finished(g) => return Ok(GameResult::Finished(g)),
            }
        }

        Ok(GameResult::InProgress(game))
    }
}

// ─────────────────────────────────────────────────────────────
//  Finished Phase
// ─────────────────────────────────────────────────────────────

/// Game finished - the board is frozen.
///
/// The outcome is always a win or a draw.
#[derive(Debug, Clone)]
pub struct GameFinished {
    board: Board,
    history: Vec<Move>,
    outcome: Outcome,
    seats: Seats,
    first: Mover,
}

impl GameFinished {
    /// Returns the outcome.
    pub fn outcome(&self) -> &Outcome {
        &self.outcome
    }

    /// Returns the winning mover, if any.
    pub fn winner(&self) -> Option<Mover> {
        self.outcome.winner().map(|player| self.seats.mover(player))
    }

    /// Returns the completed line, if any.
    pub fn winning_line(&self) -> Option<Line> {
        self.outcome.line()
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns move history.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Returns who moved first.
    pub fn first(&self) -> Mover {
        self.first
    }

    /// Returns the seats.
    pub fn seats(&self) -> Seats {
        self.seats
    }

    /// Restarts the game with the same seats.
    #[instrument(skip(self))]
    pub fn restart(self) -> GameSetup {
        GameSetup::with_seats(self.seats)
    }
}

// ─────────────────────────────────────────────────────────────
//  Result Type
// ─────────────────────────────────────────────────────────────

/// Result of making a move.
#[derive(Debug, Clone)]
pub enum GameResult {
    /// Game continues.
    InProgress(GameInProgress),
    /// Game finished.
    Finished(GameFinished),
}

impl GameResult {
    /// Returns the board.
    pub fn board(&self) -> &Board {
        match self {
            GameResult::InProgress(g) => g.board(),
            GameResult::Finished(g) => g.board(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    #[cfg(debug_assertions)]
    fn test_winning_move_still_checks_invariants() {
        // Marks on the board with no history behind them.
        let game = GameInProgress {
            board: "XX.OO....".parse().expect("valid board"),
            history: Vec::new(),
            to_move: Mover::Human,
            first: Mover::Human,
            seats: Seats::default(),
        };

        let result = game.apply_human_move(Position::TopRight);
        assert!(matches!(result, Err(MoveError::InvariantViolation(_))));
    }

    #[test]
    fn test_winning_move_finishes_clean_game() {
        let moves = [
            Move::new(Mover::Human, Position::TopLeft),
            Move::new(Mover::Computer, Position::MiddleLeft),
            Move::new(Mover::Human, Position::TopCenter),
            Move::new(Mover::Computer, Position::Center),
        ];
        let Ok(GameResult::InProgress(game)) =
            GameInProgress::replay(Seats::default(), Mover::Human, &moves)
        else {
            panic!("Expected in-progress game");
        };
        assert_eq!(game.valid_moves().len(), 5);

        let Ok(GameResult::Finished(finished)) = game.apply_human_move(Position::TopRight) else {
            panic!("Expected finished game");
        };
        assert_eq!(finished.winning_line(), Some(Line::TopRow));
        assert_eq!(finished.history().len(), 5);
    }
}
