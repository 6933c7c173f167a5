//! Tateti - tic-tac-toe against a computer opponent
//!
//! The board rules and the move selector live in [`tateti_core`]. This crate
//! adds everything around a single game session.
//!
//! # Architecture
//!
//! - **Game**: typestate lifecycle for one human versus the computer
//! - **Config**: TOML settings with command-line overrides
//! - **Report**: one-shot board analysis for scripting
//! - **TUI**: interactive terminal game
//!
//! # Example
//!
//! ```
//! use tateti::{AnyGame, Mover};
//! use tateti_core::{Difficulty, Position, ScriptedDraws};
//!
//! let mut game = AnyGame::default();
//! game.restart(Mover::Human);
//! game.human_move(Position::TopLeft).unwrap();
//! game.computer_move(Difficulty::Pro, &mut ScriptedDraws::default()).unwrap();
//! assert!(!game.board().is_empty(Position::Center));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod cli;
mod config;
mod game;
mod report;
mod tui;

// Crate-level exports - Command line
pub use cli::{Cli, Command, PlayArgs};

// Crate-level exports - Configuration
pub use config::{ConfigError, ConfigOverrides, DEFAULT_CONFIG_FILE, DEFAULT_CPU_DELAY_MS, GameConfig};

// Crate-level exports - Game lifecycle
pub use game::{
    AlternatingTurnInvariant, AnyGame, Contract, GameFinished, GameInProgress, GameInvariants,
    GameResult, GameSetup, HistoryConsistentInvariant, Invariant, InvariantSet,
    InvariantViolation, LegalMove, MonotonicBoardInvariant, Move, MoveContract, MoveError,
    Mover, MoversTurn, Seats, SquareIsEmpty,
};

// Crate-level exports - Reports
pub use report::{Suggestion, classify, outcome_text, suggest};

// Crate-level exports - Terminal UI
pub use tui::{App, TUI_LOG_FILE, run as run_tui};
