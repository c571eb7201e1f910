//! Application state and logic.

use super::input::Action;
use super::layout::{ScreenLayout, screen_layout};
use crate::config::Glyphs;
use crate::events::SessionEvent;
use crate::session::{DecidedTapPolicy, GameSession, MoveOutcome};
use ratatui::layout::Rect;
use tapgrid_rules::{Position, TurnState};
use tracing::{debug, instrument};

/// Main application state.
pub struct App {
    session: GameSession,
    glyphs: Glyphs,
    cursor: Position,
    status_message: String,
    area: Rect,
    should_quit: bool,
}

impl App {
    /// Creates a new application.
    pub fn new(policy: DecidedTapPolicy, glyphs: Glyphs) -> Self {
        let session = GameSession::with_policy(policy);
        let status_message = turn_prompt(&session, &glyphs);
        Self {
            session,
            glyphs,
            cursor: Position::Center,
            status_message,
            area: Rect::default(),
            should_quit: false,
        }
    }

    /// Gets the session.
    pub fn session(&self) -> &GameSession {
        &self.session
    }

    /// Gets the configured glyphs.
    pub fn glyphs(&self) -> &Glyphs {
        &self.glyphs
    }

    /// Gets the keyboard cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Gets the current status message.
    pub fn status_message(&self) -> &str {
        &self.status_message
    }

    /// Checks if the user asked to quit.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Records the frame size so mouse taps can be mapped to cells.
    pub fn resize(&mut self, area: Rect) {
        self.area = area;
    }

    /// Layout of the most recent frame.
    pub fn layout(&self) -> ScreenLayout {
        screen_layout(self.area)
    }

    /// Applies a user action.
    #[instrument(skip(self))]
    pub fn handle_action(&mut self, action: Action) {
        match action {
            Action::Tap(pos) => self.tap(pos),
            Action::TapCursor => self.tap(self.cursor),
            Action::MoveCursor(pos) => self.cursor = pos,
            Action::Reset => {
                self.session.reset();
                self.drain_events();
                let prompt = turn_prompt(&self.session, &self.glyphs);
                self.status_message = format!("New match. {prompt}");
            }
            Action::Quit => self.should_quit = true,
        }
    }

    fn tap(&mut self, pos: Position) {
        self.cursor = pos;
        let outcome = self.session.play(pos);
        let last = self.drain_events();

        self.status_message = match (outcome, last) {
            (_, Some(SessionEvent::GameWon { winner, .. })) => {
                format!("{} wins! Tap to play again.", self.glyphs.for_mark(winner))
            }
            (_, Some(SessionEvent::GameDrawn)) => "Draw! Tap to play again.".to_string(),
            (MoveOutcome::Occupied, _) => {
                let prompt = turn_prompt(&self.session, &self.glyphs);
                format!("{pos} is taken. {prompt}")
            }
            _ => turn_prompt(&self.session, &self.glyphs),
        };
    }

    /// Drains session events into the log, returning the last one.
    fn drain_events(&mut self) -> Option<SessionEvent> {
        let events = self.session.drain_events();
        for event in &events {
            debug!(?event, "Session event");
        }
        events.last().copied()
    }
}

/// Status text for the current turn, naming marks by their glyphs.
fn turn_prompt(session: &GameSession, glyphs: &Glyphs) -> String {
    match session.turn_state() {
        TurnState::Running => format!("{} to move.", glyphs.for_mark(session.active_player())),
        TurnState::Draw => "Draw! Tap to play again.".to_string(),
        TurnState::Won { winner, .. } => {
            format!("{} wins! Tap to play again.", glyphs.for_mark(winner))
        }
    }
}
