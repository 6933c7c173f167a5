//! Command-line interface for tateti.

use crate::config::ConfigOverrides;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use tateti_core::{Difficulty, Player};

/// Tic-tac-toe against a computer opponent with tunable difficulty
#[derive(Parser, Debug)]
#[command(name = "tateti")]
#[command(about = "Play tic-tac-toe against the computer", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play an interactive game in the terminal
    Play(PlayArgs),

    /// Print the computer's move for a board
    Suggest {
        /// Board as 9 cells: X, O or . (separators / and | are ignored)
        #[arg(short, long)]
        board: String,

        /// Difficulty: easy, normal or pro (anything else means normal)
        #[arg(short, long, default_value = "normal", value_parser = parse_difficulty)]
        difficulty: Difficulty,

        /// Mark the computer plays
        #[arg(long, default_value = "O", value_parser = parse_player)]
        computer: Player,

        /// Seed for the random draws
        #[arg(long, conflicts_with = "draws")]
        seed: Option<u64>,

        /// Explicit comma-separated draws in [0, 1), replayed in order
        #[arg(long, value_delimiter = ',')]
        draws: Option<Vec<f64>>,

        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Classify a board as won, drawn or in progress
    Outcome {
        /// Board as 9 cells: X, O or . (separators / and | are ignored)
        #[arg(short, long)]
        board: String,

        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
    },
}

/// Options for an interactive game.
#[derive(Args, Debug, Default)]
pub struct PlayArgs {
    /// Difficulty: easy, normal or pro (anything else means normal)
    #[arg(short, long, value_parser = parse_difficulty)]
    pub difficulty: Option<Difficulty>,

    /// Let the computer make the first move
    #[arg(long)]
    pub computer_starts: bool,

    /// Milliseconds before the computer replies
    #[arg(long)]
    pub delay_ms: Option<u64>,

    /// Seed for reproducible games
    #[arg(long)]
    pub seed: Option<u64>,

    /// Path to a TOML config file (defaults to ./tateti.toml if present)
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

impl PlayArgs {
    /// The flags that override config file values.
    pub fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            difficulty: self.difficulty,
            computer_starts: self.computer_starts,
            cpu_delay_ms: self.delay_ms,
            seed: self.seed,
        }
    }
}

fn parse_difficulty(s: &str) -> Result<Difficulty, String> {
    Ok(Difficulty::from_name(s))
}

fn parse_player(s: &str) -> Result<Player, String> {
    match s.trim().to_ascii_uppercase().as_str() {
        "X" => Ok(Player::X),
        "O" => Ok(Player::O),
        other => Err(format!("expected X or O, got {:?}", other)),
    }
}
