//! First-class action types for a human-versus-computer game.
//!
//! Moves are domain events, not side effects. They name who acted and where,
//! and can be validated independently of execution.

use serde::{Deserialize, Serialize};
use tateti_core::{Player, Position};
use tracing::instrument;

/// Who is acting: the person at the keyboard or the computer opponent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum Mover {
    /// The human player.
    Human,
    /// The computer opponent.
    Computer,
}

impl Mover {
    /// Returns the other mover.
    pub fn other(self) -> Self {
        match self {
            Mover::Human => Mover::Computer,
            Mover::Computer => Mover::Human,
        }
    }
}

/// Which mark each mover plays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Seats {
    /// The human's mark.
    pub human: Player,
    /// The computer's mark.
    pub computer: Player,
}

impl Seats {
    /// Seats with the human on `human` and the computer on the other mark.
    pub fn human_plays(human: Player) -> Self {
        Self {
            human,
            computer: human.opponent(),
        }
    }

    /// The mark played by `mover`.
    pub fn mark(&self, mover: Mover) -> Player {
        match mover {
            Mover::Human => self.human,
            Mover::Computer => self.computer,
        }
    }

    /// The mover playing `player`.
    pub fn mover(&self, player: Player) -> Mover {
        if player == self.human {
            Mover::Human
        } else {
            Mover::Computer
        }
    }
}

/// Human plays X, computer plays O.
impl Default for Seats {
    fn default() -> Self {
        Self::human_plays(Player::X)
    }
}

/// A move: a mover claiming a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// Who made the move.
    pub mover: Mover,
    /// The claimed position.
    pub position: Position,
}

impl Move {
    /// Creates a new move.
    #[instrument]
    pub fn new(mover: Mover, position: Position) -> Self {
        Self { mover, position }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.mover, self.position.label())
    }
}

/// Error that can occur when validating or applying a move.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The square at the position is already occupied.
    #[display("Square {} is already occupied", _0)]
    SquareOccupied(Position),

    /// The game is already over.
    #[display("Game is already over")]
    GameOver,

    /// The game has not been started.
    #[display("Game has not started yet")]
    NotStarted,

    /// It's not this mover's turn.
    #[display("It's not the {}'s turn", _0)]
    WrongTurn(Mover),

    /// The computer was asked to move on a full board.
    #[display("No move available")]
    NoMoveAvailable,

    /// An invariant was violated (postcondition failure).
    #[display("Invariant violation: {}", _0)]
    InvariantViolation(String),
}

impl std::error::Error for MoveError {}
