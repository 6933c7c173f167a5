//! Pure tic-tac-toe rules and a difficulty-tunable computer opponent.
//!
//! Everything here is a pure function of a [`Board`]:
//!
//! - [`detect`] classifies a board as [`Outcome::Ongoing`], a win (with the
//!   completed [`Line`]) or a draw.
//! - [`select_move`] picks the computer's next square, blending a fixed-depth
//!   heuristic with random safe mistakes according to a [`Difficulty`].
//!
//! Randomness is always injected through [`RandomDraw`], so games can be
//! reproduced with a seeded RNG or a [`ScriptedDraws`] list.
//!
//! # Example
//!
//! ```
//! use tateti_core::{Board, Difficulty, Outcome, Player, Position, ScriptedDraws, detect, select_move};
//!
//! let board: Board = "XX.......".parse()?;
//! assert_eq!(detect(&board), Outcome::Ongoing);
//!
//! let mut draws = ScriptedDraws::default();
//! let reply = select_move(&board, Player::O, Difficulty::Pro, &mut draws);
//! assert_eq!(reply, Some(Position::TopRight));
//! # Ok::<(), tateti_core::BoardParseError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod difficulty;
mod position;
mod random;
mod rules;
mod selector;
mod types;

pub use difficulty::Difficulty;
pub use position::Position;
pub use random::{RandomDraw, ScriptedDraws, pick};
pub use rules::{Line, Outcome, check_winner, detect, is_full, wins_with};
pub use selector::{
    Choice, Reason, heuristic_choice, heuristic_move, safe_mistakes, select_choice, select_move,
    winning_move,
};
pub use types::{Board, BoardParseError, Player, Square};
