//! Tateti - unified CLI
//!
//! Interactive play plus one-shot board analysis.

#![warn(missing_docs)]

use anyhow::{Context, Result};
use clap::Parser;
use rand::{SeedableRng, rngs::StdRng};
use tateti::{Cli, Command, GameConfig, PlayArgs, classify, outcome_text, suggest};
use tateti_core::{Difficulty, Player, RandomDraw, ScriptedDraws};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Command::Play(args) => run_play(args),
        Command::Suggest {
            board,
            difficulty,
            computer,
            seed,
            draws,
            json,
        } => {
            init_stderr_tracing();
            run_suggest(&board, difficulty, computer, seed, draws, json)
        }
        Command::Outcome { board, json } => {
            init_stderr_tracing();
            run_outcome(&board, json)
        }
    }
}

/// Run the interactive terminal game
fn run_play(args: PlayArgs) -> Result<()> {
    let config = GameConfig::load(args.config.as_deref())
        .context("Failed to load configuration")?
        .apply(&args.overrides());
    tateti::run_tui(&config)
}

/// Print the computer's move for a board
#[instrument(skip(draws))]
fn run_suggest(
    board: &str,
    difficulty: Difficulty,
    computer: Player,
    seed: Option<u64>,
    draws: Option<Vec<f64>>,
    json: bool,
) -> Result<()> {
    let mut rng: Box<dyn RandomDraw> = match (draws, seed) {
        (Some(draws), _) => Box::new(ScriptedDraws::new(draws)),
        (None, Some(seed)) => Box::new(StdRng::seed_from_u64(seed)),
        (None, None) => Box::new(StdRng::from_entropy()),
    };

    let suggestion = suggest(board, computer, difficulty, rng.as_mut())
        .with_context(|| format!("Invalid board {:?}", board))?;
    info!(index = ?suggestion.index(), "Suggestion ready");

    if json {
        println!("{}", serde_json::to_string_pretty(&suggestion)?);
    } else {
        println!("{}", suggestion.to_text());
    }
    Ok(())
}

/// Classify a board
#[instrument]
fn run_outcome(board: &str, json: bool) -> Result<()> {
    let outcome = classify(board).with_context(|| format!("Invalid board {:?}", board))?;

    if json {
        println!("{}", serde_json::to_string_pretty(&outcome)?);
    } else {
        println!("{}", outcome_text(&outcome));
    }
    Ok(())
}

fn init_stderr_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();
}
