//! Win detection logic for tic-tac-toe.

use super::super::{Board, Player, Position, Square};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// One of the eight three-in-a-row lines.
///
/// Iteration order (via [`Line::ALL`] or `strum::IntoEnumIterator`) is the
/// canonical one: rows top to bottom, columns left to right, then the two
/// diagonals.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::EnumIter,
    strum::Display,
)]
#[strum(serialize_all = "kebab-case")]
pub enum Line {
    /// Squares 0, 1, 2.
    TopRow,
    /// Squares 3, 4, 5.
    MiddleRow,
    /// Squares 6, 7, 8.
    BottomRow,
    /// Squares 0, 3, 6.
    LeftColumn,
    /// Squares 1, 4, 7.
    CenterColumn,
    /// Squares 2, 5, 8.
    RightColumn,
    /// Squares 0, 4, 8.
    MainDiagonal,
    /// Squares 2, 4, 6.
    AntiDiagonal,
}

impl Line {
    /// All lines in canonical order.
    pub const ALL: [Line; 8] = [
        Line::TopRow,
        Line::MiddleRow,
        Line::BottomRow,
        Line::LeftColumn,
        Line::CenterColumn,
        Line::RightColumn,
        Line::MainDiagonal,
        Line::AntiDiagonal,
    ];

    /// The three positions making up this line.
    pub fn positions(self) -> [Position; 3] {
        use Position::*;

        match self {
            Line::TopRow => [TopLeft, TopCenter, TopRight],
            Line::MiddleRow => [MiddleLeft, Center, MiddleRight],
            Line::BottomRow => [BottomLeft, BottomCenter, BottomRight],
            Line::LeftColumn => [TopLeft, MiddleLeft, BottomLeft],
            Line::CenterColumn => [TopCenter, Center, BottomCenter],
            Line::RightColumn => [TopRight, MiddleRight, BottomRight],
            Line::MainDiagonal => [TopLeft, Center, BottomRight],
            Line::AntiDiagonal => [TopRight, Center, BottomLeft],
        }
    }

    /// The three board indices making up this line.
    pub fn indices(self) -> [usize; 3] {
        self.positions().map(Position::to_index)
    }

    /// Returns true if `pos` lies on this line.
    pub fn contains(self, pos: Position) -> bool {
        self.positions().contains(&pos)
    }
}

/// Checks if there is a winner on the board.
///
/// Returns the player and the first completed line in canonical order,
/// `None` otherwise.
#[instrument(level = "trace", skip(board), fields(board = %board))]
pub fn check_winner(board: &Board) -> Option<(Player, Line)> {
    Line::ALL.into_iter().find_map(|line| {
        let [a, b, c] = line.positions();
        match board.get(a) {
            Square::Occupied(player) if board.get(b) == board.get(a) && board.get(c) == board.get(a) => {
                Some((player, line))
            }
            _ => None,
        }
    })
}

/// Returns true if placing `player` at `pos` completes a line for them.
pub fn wins_with(board: &Board, pos: Position, player: Player) -> bool {
    matches!(check_winner(&board.with_mark(pos, player)), Some((winner, _)) if winner == player)
}
