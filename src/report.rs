//! One-shot board analysis for the `suggest` and `outcome` commands.

use derive_getters::Getters;
use derive_new::new;
use serde::Serialize;
use tateti_core::{
    Board, BoardParseError, Difficulty, Outcome, Player, Position, RandomDraw, detect, select_choice,
};
use tracing::{info, instrument};

/// The computer's pick for a board.
#[derive(Debug, Clone, PartialEq, Serialize, new, Getters)]
pub struct Suggestion {
    /// The board, in compact text form.
    board: String,
    /// Difficulty used.
    difficulty: Difficulty,
    /// Mark the computer plays.
    computer: Player,
    /// Chosen square index (0-8), or none on a full board.
    index: Option<usize>,
    /// Heuristic rule or mistake that produced the move.
    reason: Option<String>,
    /// Outcome of the board before the move.
    outcome: Outcome,
}

impl Suggestion {
    /// Human-readable summary.
    pub fn to_text(&self) -> String {
        match (self.index, &self.reason) {
            (Some(index), Some(reason)) => {
                let label = Position::from_index(index).map(|p| p.label()).unwrap_or("?");
                format!("{} plays {} ({}) [{}]", self.computer, index, label, reason)
            }
            _ => format!("No move available ({})", self.outcome),
        }
    }
}

/// Parses `board` and asks the computer for a move.
#[instrument(skip(rng))]
pub fn suggest<R: RandomDraw + ?Sized>(
    board: &str,
    computer: Player,
    difficulty: Difficulty,
    rng: &mut R,
) -> Result<Suggestion, BoardParseError> {
    let board: Board = board.parse()?;
    let outcome = detect(&board);
    let choice = select_choice(&board, computer, difficulty, rng);
    info!(?choice, %outcome, "Suggestion computed");

    Ok(Suggestion::new(
        board.to_string(),
        difficulty,
        computer,
        choice.map(|c| c.position.to_index()),
        choice.map(|c| c.reason.to_string()),
        outcome,
    ))
}

/// Parses `board` and classifies it.
#[instrument]
pub fn classify(board: &str) -> Result<Outcome, BoardParseError> {
    let board: Board = board.parse()?;
    Ok(detect(&board))
}

/// Human-readable outcome summary, with the winning squares when there are some.
pub fn outcome_text(outcome: &Outcome) -> String {
    match outcome.line() {
        Some(line) => format!("{} {:?}", outcome, line.indices()),
        None => outcome.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tateti_core::ScriptedDraws;

    #[test]
    fn test_suggest_block() {
        let s = suggest("XX.......", Player::O, Difficulty::Pro, &mut ScriptedDraws::default())
            .expect("valid board");
        assert_eq!(*s.index(), Some(2));
        assert_eq!(s.reason().as_deref(), Some("block"));
        assert_eq!(s.to_text(), "O plays 2 (Top-right) [block]");
    }

    #[test]
    fn test_suggest_full_board() {
        let s = suggest("XOXXOOOXX", Player::O, Difficulty::Easy, &mut ScriptedDraws::default())
            .expect("valid board");
        assert_eq!(*s.index(), None);
        assert_eq!(s.to_text(), "No move available (Draw)");
    }

    #[test]
    fn test_suggest_json_shape() {
        let s = suggest("OO.XX....", Player::O, Difficulty::Pro, &mut ScriptedDraws::default())
            .expect("valid board");
        let json = serde_json::to_value(&s).expect("serializes");
        assert_eq!(json["index"], 2);
        assert_eq!(json["difficulty"], "pro");
        assert_eq!(json["outcome"]["kind"], "ongoing");
    }

    #[test]
    fn test_classify() {
        let outcome = classify("XXX/OO./...").expect("valid board");
        assert_eq!(outcome_text(&outcome), "Player X wins (top-row) [0, 1, 2]");
        assert!(classify("XXXX").is_err());
    }
}
