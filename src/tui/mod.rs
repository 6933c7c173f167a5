//! Terminal UI for playing against the computer.

mod app;
mod input;
mod ui;

pub use app::App;

use crate::config::GameConfig;
use anyhow::{Context, Result};
use crossterm::{
    cursor,
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::time::{Duration, Instant};
use tracing::{error, info, instrument};

/// Log file for TUI sessions, so tracing output stays off the screen.
pub const TUI_LOG_FILE: &str = "tateti.log";

const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Runs an interactive game until the user quits.
pub fn run(config: &GameConfig) -> Result<()> {
    let log_file = std::fs::File::create(TUI_LOG_FILE)
        .with_context(|| format!("Failed to create {}", TUI_LOG_FILE))?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init(); // Don't panic if already initialized

    info!(?config, "Starting tateti TUI");

    enable_raw_mode()?;
    let res = with_restore(
        || {
            execute!(io::stdout(), EnterAlternateScreen)?;
            let mut terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;
            let mut app = App::new(config, Instant::now());
            run_loop(&mut terminal, &mut app)
        },
        restore_terminal,
    );

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    info!("TUI closed");
    res
}

/// Runs `body`, then `restore` whether or not `body` failed.
///
/// An error from `body` wins over one from `restore`.
fn with_restore<T>(
    body: impl FnOnce() -> Result<T>,
    restore: impl FnOnce() -> Result<()>,
) -> Result<T> {
    let res = body();
    let restored = restore();
    match (res, restored) {
        (Ok(value), Ok(())) => Ok(value),
        (Ok(_), Err(err)) => Err(err),
        (Err(err), restored) => {
            if let Err(restore_err) = restored {
                error!(error = ?restore_err, "Failed to restore terminal");
            }
            Err(err)
        }
    }
}

fn restore_terminal() -> Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen, cursor::Show)?;
    Ok(())
}

/// Draws, reads keys and lets the computer move until quit.
#[instrument(skip_all)]
fn run_loop(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|f| ui::draw(f, app))?;

        if event::poll(POLL_INTERVAL)?
            && let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            app.handle_key(key.code, Instant::now());
        }

        if app.should_quit() {
            return Ok(());
        }

        app.tick(Instant::now());
    }
}
