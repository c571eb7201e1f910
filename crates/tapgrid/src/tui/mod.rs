//! Terminal UI: tap cells with the mouse or keyboard.

mod app;
mod input;
mod layout;
mod ui;

pub use app::App;
pub use input::{Action, key_action, mouse_action, move_cursor};
pub use layout::{Orientation, ScreenLayout, cell_at, cell_rect, screen_layout};

use crate::config::AppConfig;
use anyhow::{Context, Result};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::time::Duration;
use tracing::{error, info, instrument};

/// Runs the interactive game until the user quits.
#[instrument(skip_all, fields(policy = %config.decided_tap()))]
pub fn run(config: &AppConfig) -> Result<()> {
    info!("Starting tapgrid TUI");

    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(*config.decided_tap(), config.glyphs().clone());
    let res = run_loop(&mut terminal, &mut app);

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
    info!(score = %app.session().score(), "TUI exited");
    res
}

fn run_loop(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> Result<()> {
    while !app.should_quit() {
        terminal.draw(|frame| {
            app.resize(frame.area());
            ui::draw(frame, app);
        })?;

        if !event::poll(Duration::from_millis(250))? {
            continue;
        }

        let action = match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                key_action(app.cursor(), key.code)
            }
            Event::Mouse(mouse) => mouse_action(app.layout().board, mouse),
            _ => None,
        };

        if let Some(action) = action {
            app.handle_action(action);
        }
    }

    Ok(())
}
