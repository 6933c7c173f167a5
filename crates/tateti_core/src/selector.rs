//! Computer move selection.
//!
//! The computer plays a fixed-depth heuristic (win, block, center, corner,
//! anything) and, depending on the [`Difficulty`], sometimes swaps the
//! heuristic's choice for a random *safe mistake*: a move after which the
//! opponent has no immediate winning reply.
//!
//! The mistake filter only looks one ply ahead. A mistake may still set up a
//! fork for the opponent; that is how the easier levels stay beatable.

use super::difficulty::Difficulty;
use super::random::{RandomDraw, pick};
use super::rules::wins_with;
use super::{Board, Player, Position};
use tracing::{debug, instrument};

/// Which heuristic rule produced a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display)]
#[strum(serialize_all = "kebab-case")]
pub enum Reason {
    /// Completes a line for the computer.
    Win,
    /// Stops the opponent completing a line.
    Block,
    /// Takes the center.
    Center,
    /// Takes a random free corner.
    Corner,
    /// Takes any random free square.
    Any,
    /// Deliberate non-optimal move that leaves no immediate loss.
    SafeMistake,
    /// Deliberate non-optimal move when every option loses immediately.
    ForcedMistake,
}

/// A chosen move and the rule that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Choice {
    /// Where to play.
    pub position: Position,
    /// Why.
    pub reason: Reason,
}

/// Returns the first empty position (index order) where `player` wins at once.
pub fn winning_move(board: &Board, player: Player) -> Option<Position> {
    board
        .empty_positions()
        .into_iter()
        .find(|&pos| wins_with(board, pos, player))
}

/// Empty positions after which `opponent` of `computer` has no immediate win.
///
/// Returned in index order.
#[instrument(level = "debug", skip(board), fields(board = %board))]
pub fn safe_mistakes(board: &Board, computer: Player) -> Vec<Position> {
    let opponent = computer.opponent();
    board
        .empty_positions()
        .into_iter()
        .filter(|&pos| winning_move(&board.with_mark(pos, computer), opponent).is_none())
        .collect()
}

/// Deterministic-where-possible best move for `computer`.
///
/// Only the corner and any-square steps consume draws.
#[instrument(level = "debug", skip(board, rng), fields(board = %board))]
pub fn heuristic_choice<R: RandomDraw + ?Sized>(
    board: &Board,
    computer: Player,
    rng: &mut R,
) -> Option<Choice> {
    if let Some(position) = winning_move(board, computer) {
        return Some(Choice {
            position,
            reason: Reason::Win,
        });
    }

    if let Some(position) = winning_move(board, computer.opponent()) {
        return Some(Choice {
            position,
            reason: Reason::Block,
        });
    }

    if board.is_empty(Position::Center) {
        return Some(Choice {
            position: Position::Center,
            reason: Reason::Center,
        });
    }

    let corners: Vec<Position> = Position::CORNERS
        .iter()
        .copied()
        .filter(|&pos| board.is_empty(pos))
        .collect();
    if let Some(position) = pick(&corners, rng) {
        return Some(Choice {
            position,
            reason: Reason::Corner,
        });
    }

    pick(&board.empty_positions(), rng).map(|position| Choice {
        position,
        reason: Reason::Any,
    })
}

/// Heuristic best move, without the reason.
pub fn heuristic_move<R: RandomDraw + ?Sized>(
    board: &Board,
    computer: Player,
    rng: &mut R,
) -> Option<Position> {
    heuristic_choice(board, computer, rng).map(|c| c.position)
}

/// Difficulty-weighted choice for `computer`.
///
/// Returns `None` only when the board has no empty square.
#[instrument(skip(board, rng), fields(board = %board))]
pub fn select_choice<R: RandomDraw + ?Sized>(
    board: &Board,
    computer: Player,
    difficulty: Difficulty,
    rng: &mut R,
) -> Option<Choice> {
    let empty = board.empty_positions();
    if empty.is_empty() {
        debug!("Board is full, no move available");
        return None;
    }

    let rate = difficulty.mistake_rate();
    if rate == 0.0 {
        return heuristic_choice(board, computer, rng);
    }

    let roll = rng.draw();
    if roll < rate {
        let safe = safe_mistakes(board, computer);
        debug!(roll, rate, safe = safe.len(), "Making a deliberate mistake");
        let choice = if safe.is_empty() {
            pick(&empty, rng).map(|position| Choice {
                position,
                reason: Reason::ForcedMistake,
            })
        } else {
            pick(&safe, rng).map(|position| Choice {
                position,
                reason: Reason::SafeMistake,
            })
        };
        return choice;
    }

    heuristic_choice(board, computer, rng)
}

/// Picks the computer's next move.
///
/// `computer` is the mark the computer plays; the opponent plays the other
/// one. Returns `None` if the board is full.
pub fn select_move<R: RandomDraw + ?Sized>(
    board: &Board,
    computer: Player,
    difficulty: Difficulty,
    rng: &mut R,
) -> Option<Position> {
    let choice = select_choice(board, computer, difficulty, rng)?;
    debug!(position = %choice.position, reason = %choice.reason, "Computer move selected");
    Some(choice.position)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::ScriptedDraws;

    fn board(s: &str) -> Board {
        s.parse().expect("valid board")
    }

    #[test]
    fn test_heuristic_prefers_win_over_block() {
        // O can win at 2, X threatens 5.
        let b = board("OO.XX....");
        let choice = heuristic_choice(&b, Player::O, &mut ScriptedDraws::default());
        assert_eq!(
            choice,
            Some(Choice {
                position: Position::TopRight,
                reason: Reason::Win
            })
        );
    }

    #[test]
    fn test_heuristic_blocks() {
        let choice = heuristic_choice(&board("XX......."), Player::O, &mut ScriptedDraws::default());
        assert_eq!(choice.map(|c| c.reason), Some(Reason::Block));
        assert_eq!(choice.map(|c| c.position), Some(Position::TopRight));
    }

    #[test]
    fn test_heuristic_center_then_corner() {
        let choice = heuristic_choice(&Board::new(), Player::O, &mut ScriptedDraws::default());
        assert_eq!(choice.map(|c| c.position), Some(Position::Center));

        let b = board("....X....");
        let corner = heuristic_move(&b, Player::O, &mut ScriptedDraws::constant(0.99));
        assert_eq!(corner, Some(Position::BottomRight));
        let corner = heuristic_move(&b, Player::O, &mut ScriptedDraws::constant(0.0));
        assert_eq!(corner, Some(Position::TopLeft));
    }

    #[test]
    fn test_heuristic_falls_back_to_edges() {
        // O . X / X X O / O . X: center and corners taken, nobody threatens.
        let b = board("O.XXXOO.X");
        assert_eq!(winning_move(&b, Player::O), None);
        assert_eq!(winning_move(&b, Player::X), None);
        let choice = heuristic_choice(&b, Player::O, &mut ScriptedDraws::constant(0.7));
        assert_eq!(
            choice,
            Some(Choice {
                position: Position::BottomCenter,
                reason: Reason::Any
            })
        );
    }

    #[test]
    fn test_safe_mistakes_excludes_losing_moves() {
        // X threatens 2; only blocking there is safe.
        let b = board("XX..O....");
        assert_eq!(safe_mistakes(&b, Player::O), vec![Position::TopRight]);
    }

    #[test]
    fn test_pro_consumes_no_roll() {
        let mut draws = ScriptedDraws::new([0.0]);
        let pos = select_move(&board("XX......."), Player::O, Difficulty::Pro, &mut draws);
        assert_eq!(pos, Some(Position::TopRight));
        assert_eq!(draws.consumed(), 0);
    }

    #[test]
    fn test_full_board_has_no_move() {
        let b = board("XOXXOOOXX");
        for difficulty in [Difficulty::Easy, Difficulty::Normal, Difficulty::Pro] {
            assert_eq!(select_move(&b, Player::O, difficulty, &mut ScriptedDraws::default()), None);
        }
    }

    #[test]
    fn test_forced_mistake_when_nothing_is_safe() {
        // X has two open threats (2 and 6); every O move leaves one open.
        let b = board("XX.XO....");
        assert!(safe_mistakes(&b, Player::O).is_empty());
        let choice = select_choice(&b, Player::O, Difficulty::Easy, &mut ScriptedDraws::constant(0.0));
        assert_eq!(choice.map(|c| c.reason), Some(Reason::ForcedMistake));
    }

    #[test]
    fn test_high_roll_uses_heuristic() {
        let mut draws = ScriptedDraws::new([0.9]);
        let choice = select_choice(&board("XX......."), Player::O, Difficulty::Easy, &mut draws);
        assert_eq!(choice.map(|c| c.reason), Some(Reason::Block));
        assert_eq!(draws.consumed(), 1);
    }

    #[test]
    fn test_board_scans_stay_below_info() {
        use std::sync::{Arc, Mutex};
        use tracing::{Level, Subscriber, span};
        use tracing_subscriber::layer::{Context, Layer, SubscriberExt};

        #[derive(Clone, Default)]
        struct SpanLevels(Arc<Mutex<Vec<(&'static str, Level)>>>);

        impl<S: Subscriber> Layer<S> for SpanLevels {
            fn on_new_span(&self, attrs: &span::Attributes<'_>, _id: &span::Id, _ctx: Context<'_, S>) {
                let meta = attrs.metadata();
                if let Ok(mut spans) = self.0.lock() {
                    spans.push((meta.name(), *meta.level()));
                }
            }
        }

        let layer = SpanLevels::default();
        let subscriber = tracing_subscriber::registry().with(layer.clone());
        tracing::subscriber::with_default(subscriber, || {
            select_move(&board("X...O...."), Player::O, Difficulty::Easy, &mut ScriptedDraws::constant(0.0));
        });

        let spans = layer.0.lock().expect("span log").clone();
        assert!(spans.iter().any(|(name, _)| *name == "check_winner"));
        for (name, level) in &spans {
            match *name {
                "check_winner" => assert_eq!(*level, Level::TRACE),
                "select_choice" => {}
                other => assert_ne!(*level, Level::INFO, "{other} opened an info span"),
            }
        }
    }
}
