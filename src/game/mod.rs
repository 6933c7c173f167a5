//! Game lifecycle for a human playing the computer.
//!
//! The core crate only knows boards. This module owns the single mutable
//! game: who moves, which mark each side plays, when the board freezes, and
//! restarts.

mod action;
mod contracts;
mod invariants;
mod typestate;
mod wrapper;

pub use action::{Move, MoveError, Mover, Seats};
pub use contracts::{Contract, LegalMove, MoveContract, MoversTurn, SquareIsEmpty};
pub use invariants::{
    AlternatingTurnInvariant, GameInvariants, HistoryConsistentInvariant, Invariant,
    InvariantSet, InvariantViolation, MonotonicBoardInvariant,
};
pub use typestate::{GameFinished, GameInProgress, GameResult, GameSetup};
pub use wrapper::AnyGame;
