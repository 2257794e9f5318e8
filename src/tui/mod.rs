//! Terminal UI for tic-tac-toe.

mod app;
mod confetti;
mod input;
mod theme;
mod ui;

use app::{App, Flow};
pub use theme::Theme;

use anyhow::Result;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout};
use std::time::{Duration, Instant};
use tictactoe_core::GameMode;
use tracing::{error, info, instrument};

use crate::config::AppConfig;

/// How long to wait for input before redrawing.
const FRAME: Duration = Duration::from_millis(33);

/// Runs the terminal game until the user quits.
///
/// With `mode` set the mode selection screen is skipped.
#[instrument(skip(config))]
pub fn run_tui(config: &AppConfig, mode: Option<GameMode>) -> Result<()> {
    info!("Starting tic-tac-toe TUI");

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(config);
    if let Some(mode) = mode {
        app.start(mode);
    }

    let res = run_app(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    info!(scores = ?app.game().scores(), "Session ended");
    res
}

/// Input, tick, render until quit.
fn run_app(terminal: &mut Terminal<CrosstermBackend<Stdout>>, app: &mut App) -> Result<()> {
    loop {
        let now = Instant::now();
        app.tick(now);
        terminal.draw(|f| ui::draw(f, app, now))?;

        if event::poll(FRAME)?
            && let Event::Key(key) = event::read()?
        {
            // Skip key release events (crossterm fires both press and release on some platforms).
            if key.kind == KeyEventKind::Release {
                continue;
            }
            if app.handle_key(key, Instant::now()) == Flow::Quit {
                return Ok(());
            }
        }
    }
}
