//! Application state and logic.

use crate::config::GameConfig;
use crate::game::{AnyGame, Mover};
use crossterm::event::KeyCode;
use rand::rngs::StdRng;
use std::time::{Duration, Instant};
use tateti_core::{Board, Difficulty, Line, Position};
use tracing::{debug, info, instrument, warn};

use super::input::move_cursor;

/// Main application state.
///
/// Owns the single game, the settings the player can change mid-session,
/// and the pending computer reply.
pub struct App {
    game: AnyGame,
    difficulty: Difficulty,
    computer_starts: bool,
    cpu_delay: Duration,
    rng: StdRng,
    cursor: Position,
    cpu_due: Option<Instant>,
    status_message: String,
    should_quit: bool,
}

impl App {
    /// Creates a new application and starts the first game.
    #[instrument(skip(config, now))]
    pub fn new(config: &GameConfig, now: Instant) -> Self {
        let mut app = Self {
            game: AnyGame::default(),
            difficulty: *config.difficulty(),
            computer_starts: *config.computer_starts(),
            cpu_delay: config.cpu_delay(),
            rng: config.rng(),
            cursor: Position::Center,
            cpu_due: None,
            status_message: String::new(),
            should_quit: false,
        };
        app.restart(now);
        app
    }

    /// Gets the board.
    pub fn board(&self) -> &Board {
        self.game.board()
    }

    /// Gets the current game.
    pub fn game(&self) -> &AnyGame {
        &self.game
    }

    /// Gets the cursor position.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Gets the current status message.
    pub fn status_message(&self) -> &str {
        &self.status_message
    }

    /// Gets the difficulty.
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// Whether the computer opens each game.
    pub fn computer_starts(&self) -> bool {
        self.computer_starts
    }

    /// The completed line to highlight, if the game was won.
    pub fn winning_line(&self) -> Option<Line> {
        self.game.outcome().line()
    }

    /// True while the board accepts no input.
    pub fn is_locked(&self) -> bool {
        self.game.is_over() || self.cpu_due.is_some()
    }

    /// True once the user asked to quit.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Restarts the game with the current settings.
    #[instrument(skip(self, now))]
    pub fn restart(&mut self, now: Instant) {
        let first = if self.computer_starts {
            Mover::Computer
        } else {
            Mover::Human
        };
        info!(%first, difficulty = %self.difficulty, "New game");

        self.game.restart(first);
        self.cursor = Position::Center;
        match first {
            Mover::Computer => {
                self.status_message = "Computer's turn…".to_string();
                self.cpu_due = Some(now + self.cpu_delay);
            }
            Mover::Human => {
                self.status_message = self.your_turn();
                self.cpu_due = None;
            }
        }
    }

    /// Handles a key press.
    #[instrument(skip(self, now))]
    pub fn handle_key(&mut self, key: KeyCode, now: Instant) {
        match key {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Char('r') => self.restart(now),
            KeyCode::Char('d') => {
                self.difficulty = self.difficulty.next();
                self.restart(now);
            }
            KeyCode::Char('c') => {
                self.computer_starts = !self.computer_starts;
                self.restart(now);
            }
            KeyCode::Enter | KeyCode::Char(' ') => self.play(self.cursor, now),
            KeyCode::Char(c @ '1'..='9') => {
                if let Some(pos) = Position::from_label_or_number(&c.to_string()) {
                    self.cursor = pos;
                    self.play(pos, now);
                }
            }
            code => self.cursor = move_cursor(self.cursor, code),
        }
    }

    /// Claims `pos` for the human and schedules the computer's reply.
    #[instrument(skip(self, now))]
    pub fn play(&mut self, pos: Position, now: Instant) {
        if self.is_locked() {
            debug!("Board locked, ignoring move");
            return;
        }

        if let Err(e) = self.game.human_move(pos) {
            self.status_message = e.to_string();
            return;
        }

        if self.check_end() {
            return;
        }

        self.status_message = "Computer's turn…".to_string();
        self.cpu_due = Some(now + self.cpu_delay);
    }

    /// Lets the computer move once its delay has elapsed.
    #[instrument(skip(self, now))]
    pub fn tick(&mut self, now: Instant) {
        match self.cpu_due {
            Some(due) if now >= due => {}
            _ => return,
        }
        self.cpu_due = None;

        if let Err(e) = self.game.computer_move(self.difficulty, &mut self.rng) {
            warn!(error = %e, "Computer could not move");
            self.status_message = e.to_string();
            return;
        }

        if !self.check_end() {
            self.status_message = self.your_turn();
        }
    }

    fn your_turn(&self) -> String {
        format!("Your turn (you play {})", self.game.seats().human)
    }

    /// Updates the status for a finished game; returns true if it is over.
    fn check_end(&mut self) -> bool {
        let AnyGame::Finished(finished) = &self.game else {
            return false;
        };

        let verdict = match finished.winner() {
            Some(Mover::Human) => "You win!",
            Some(Mover::Computer) => "You lose.",
            None => "Draw.",
        };
        info!(outcome = %finished.outcome(), "Game over");
        self.status_message = format!("{} Press 'r' to play again or 'q' to quit.", verdict);
        true
    }
}
