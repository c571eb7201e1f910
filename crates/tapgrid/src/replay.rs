//! Headless replay of a tap sequence.

use crate::events::SessionEvent;
use crate::session::{GameSession, MoveOutcome, SessionSnapshot};
use serde::Serialize;
use std::str::FromStr;
use tapgrid_rules::{ParsePositionError, Position};
use tracing::{debug, instrument};

/// One step of a replay script.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplayStep {
    /// Tap a cell.
    Tap(Position),
    /// Start a new match.
    Reset,
}

impl FromStr for ReplayStep {
    type Err = ParsePositionError;

    /// `reset` (any case) or anything [`Position`] parses.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("reset") {
            Ok(ReplayStep::Reset)
        } else {
            s.parse().map(ReplayStep::Tap)
        }
    }
}

/// Parses whitespace-separated steps, e.g. `"0,0 1,1 reset 4"`.
pub fn parse_steps<'a>(
    tokens: impl IntoIterator<Item = &'a str>,
) -> Result<Vec<ReplayStep>, ParsePositionError> {
    tokens
        .into_iter()
        .flat_map(str::split_whitespace)
        .map(str::parse)
        .collect()
}

/// Everything a replay produced.
#[derive(Debug, Clone, Serialize)]
pub struct ReplayReport {
    /// Outcome of each tap, `None` for resets.
    pub outcomes: Vec<Option<MoveOutcome>>,
    /// Events in the order they were emitted.
    pub events: Vec<SessionEvent>,
    /// Final session state.
    pub snapshot: SessionSnapshot,
}

/// Runs `steps` against `session`.
#[instrument(skip_all, fields(steps = steps.len()))]
pub fn run(session: &mut GameSession, steps: &[ReplayStep]) -> ReplayReport {
    let mut outcomes = Vec::with_capacity(steps.len());
    let mut events = session.drain_events();

    for step in steps {
        let outcome = match *step {
            ReplayStep::Tap(pos) => Some(session.play(pos)),
            ReplayStep::Reset => {
                session.reset();
                None
            }
        };
        debug!(?step, ?outcome, "Replayed step");
        outcomes.push(outcome);
        events.extend(session.drain_events());
    }

    ReplayReport {
        outcomes,
        events,
        snapshot: session.snapshot(),
    }
}

impl std::fmt::Display for ReplayReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let board = tapgrid_rules::Board::from_cells(self.snapshot.board);
        writeln!(f, "{board}")?;
        writeln!(f)?;
        writeln!(f, "State: {}", self.snapshot.turn_state)?;
        writeln!(f, "Next:  {}", self.snapshot.active_player)?;
        write!(f, "Score: {}", self.snapshot.score)
    }
}
