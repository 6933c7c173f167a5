//! Outcome detection for tic-tac-toe.

mod draw;
mod win;

pub use draw::is_full;
pub use win::{Line, check_winner, wins_with};

use super::{Board, Player};
use serde::{Deserialize, Serialize};
use tracing::{instrument, trace};

/// Classification of a board.
///
/// Never stored by the core: always recomputed from the board with [`detect`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Outcome {
    /// Nobody has won and at least one square is empty.
    Ongoing,
    /// `player` completed `line`.
    Win {
        /// The winning mark.
        player: Player,
        /// The completed line.
        line: Line,
    },
    /// The board is full without a winner.
    Draw,
}

impl Outcome {
    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Player> {
        match self {
            Outcome::Win { player, .. } => Some(*player),
            Outcome::Ongoing | Outcome::Draw => None,
        }
    }

    /// Returns the completed line if there is one.
    pub fn line(&self) -> Option<Line> {
        match self {
            Outcome::Win { line, .. } => Some(*line),
            Outcome::Ongoing | Outcome::Draw => None,
        }
    }

    /// Returns true once the game can no longer continue.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Outcome::Ongoing)
    }

    /// Returns true if the game was a draw.
    pub fn is_draw(&self) -> bool {
        matches!(self, Outcome::Draw)
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Ongoing => write!(f, "In progress"),
            Outcome::Win { player, line } => write!(f, "Player {} wins ({})", player, line),
            Outcome::Draw => write!(f, "Draw"),
        }
    }
}

/// Classifies a board as won, drawn or still in progress.
#[instrument(level = "debug", skip(board), fields(board = %board))]
pub fn detect(board: &Board) -> Outcome {
    let outcome = if let Some((player, line)) = check_winner(board) {
        Outcome::Win { player, line }
    } else if is_full(board) {
        Outcome::Draw
    } else {
        Outcome::Ongoing
    };
    trace!(%outcome, "Detected outcome");
    outcome
}
