//! Session events and the edge-triggered turn watcher.
//!
//! Events are domain facts about what a call did to the session. The front
//! end drains them to update status text and logs; it never feeds them back.

use serde::{Deserialize, Serialize};
use tapgrid_rules::{Mark, Position, TurnState};
use tracing::{debug, instrument};

/// Something that happened to a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SessionEvent {
    /// A mark was put on an empty cell.
    MarkPlaced {
        /// Mark that was placed.
        mark: Mark,
        /// Where it was placed.
        position: Position,
    },
    /// A tap on an occupied cell was dropped.
    MoveIgnored {
        /// The occupied cell.
        position: Position,
    },
    /// A decided board was wiped; the score was kept.
    BoardCleared,
    /// The board went from undecided to won.
    GameWon {
        /// Mark that completed the line.
        winner: Mark,
        /// The completed line.
        line: [Position; 3],
    },
    /// The board filled up with no completed line.
    GameDrawn,
    /// Board, turn and score were reset.
    MatchReset,
}

impl std::fmt::Display for SessionEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SessionEvent::MarkPlaced { mark, position } => write!(f, "{mark} played {position}"),
            SessionEvent::MoveIgnored { position } => write!(f, "{position} is already taken"),
            SessionEvent::BoardCleared => write!(f, "Board cleared"),
            SessionEvent::GameWon { winner, .. } => write!(f, "{winner} wins!"),
            SessionEvent::GameDrawn => write!(f, "Draw"),
            SessionEvent::MatchReset => write!(f, "New match"),
        }
    }
}

/// Watches successive turn states and reports edges.
///
/// `GameWon` fires only on a transition from a state without a winner into
/// `Won`, and `GameDrawn` only on a transition into `Draw`. Observing the
/// same state any number of times reports nothing after the first time.
#[derive(Debug, Clone)]
pub struct TurnWatcher {
    last: TurnState,
}

impl TurnWatcher {
    /// Creates a watcher that has last seen a running board.
    pub fn new() -> Self {
        Self {
            last: TurnState::Running,
        }
    }

    /// The most recently observed state.
    pub fn last(&self) -> TurnState {
        self.last
    }

    /// Records `state` and returns the event for the edge, if any.
    #[instrument(level = "trace", skip(self), fields(last = %self.last))]
    pub fn observe(&mut self, state: TurnState) -> Option<SessionEvent> {
        if state == self.last {
            return None;
        }

        let previous = std::mem::replace(&mut self.last, state);
        debug!(%previous, current = %state, "Turn state changed");

        match state {
            TurnState::Won { winner, line } if previous.winner().is_none() => {
                Some(SessionEvent::GameWon { winner, line })
            }
            TurnState::Draw => Some(SessionEvent::GameDrawn),
            _ => None,
        }
    }
}

impl Default for TurnWatcher {
    fn default() -> Self {
        Self::new()
    }
}
