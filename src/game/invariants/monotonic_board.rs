//! Monotonic board invariant: squares never change once claimed.

use super::super::GameInProgress;
use super::Invariant;
use tateti_core::{Board, Square};

/// Invariant: Board squares are monotonic (never overwritten).
///
/// Replaying the history onto an empty board must claim only empty squares
/// and must reproduce the current board exactly.
pub struct MonotonicBoardInvariant;

impl Invariant<GameInProgress> for MonotonicBoardInvariant {
    fn holds(game: &GameInProgress) -> bool {
        let seats = game.seats();
        let mut reconstructed = Board::new();

        for mov in game.history() {
            if !reconstructed.is_empty(mov.position) {
                return false;
            }
            reconstructed.set(mov.position, Square::Occupied(seats.mark(mov.mover)));
        }

        reconstructed == *game.board()
    }

    fn description() -> &'static str {
        "Board squares are monotonic (never overwritten)"
    }
}
