//! Terminal front end.

mod app;
mod gallows;
mod rack;
mod ui;

use std::io;
use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::Backend, backend::CrosstermBackend};
use tracing::{error, info, instrument};

use crate::config::TuiConfig;

use app::{App, Control};

/// Runs the game until the player quits.
///
/// Puts the terminal in raw mode on the alternate screen and restores it
/// before returning, also when the loop fails.
#[instrument(skip_all)]
pub fn run(config: &TuiConfig) -> Result<()> {
    info!("Starting Phantom Hangman TUI");

    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("Failed to enter alternate screen")?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(*config.show_password());
    let res = run_app(
        &mut terminal,
        &mut app,
        Duration::from_millis(*config.tick_rate_ms()),
    );

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    info!("Phantom Hangman TUI stopped");
    res
}

fn run_app<B: Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    tick_rate: Duration,
) -> Result<()>
where
    <B as Backend>::Error: Send + Sync + 'static,
{
    loop {
        terminal.draw(|f| ui::draw(f, app))?;

        if event::poll(tick_rate)?
            && let Event::Key(key) = event::read()?
        {
            // crossterm reports releases on some platforms
            if key.kind == KeyEventKind::Release {
                continue;
            }
            if app.handle_key(key) == Control::Quit {
                return Ok(());
            }
        }
    }
}
