//! Game session: the board, whose turn it is, and the match score.
//!
//! All mutation goes through [`GameSession::apply_move`] (or its typed twin
//! [`GameSession::play`]) and [`GameSession::reset`]. The turn state is
//! re-derived from the board on every read.

use crate::events::{SessionEvent, TurnWatcher};
use crate::score::Score;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use tapgrid_rules::{Board, Cell, Mark, Position, TurnState};
use tracing::{debug, info, instrument};

/// Most events a session keeps queued; older ones are dropped first.
pub const EVENT_CAPACITY: usize = 64;

/// What a tap on a decided board does.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    clap::ValueEnum,
    strum::Display,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum DecidedTapPolicy {
    /// Clear the board and drop the tap. The tap that starts a new round
    /// never places a mark.
    #[default]
    ClearOnly,
    /// Clear the board, then play the tap as the first move of the new round.
    ClearAndPlace,
}

/// Result of a single tap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MoveOutcome {
    /// The active mark was placed and the turn passed.
    Placed,
    /// The cell was taken; nothing changed.
    Occupied,
    /// The board was decided and has been cleared; no mark was placed.
    Cleared,
    /// The board was decided, has been cleared, and the tap was played.
    ClearedAndPlaced,
}

/// Read-only view of a session for front ends.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    /// Cells in row-major order.
    pub board: [Cell; 9],
    /// Mark that plays next.
    pub active_player: Mark,
    /// Derived state of the board.
    pub turn_state: TurnState,
    /// Wins since the last match reset.
    pub score: Score,
}

/// One continuous sequence of rounds between X and O.
#[derive(Debug, Clone)]
pub struct GameSession {
    board: Board,
    active_player: Mark,
    score: Score,
    policy: DecidedTapPolicy,
    watcher: TurnWatcher,
    events: VecDeque<SessionEvent>,
}

impl GameSession {
    /// Creates a session with an empty board, X to move and no wins.
    #[instrument]
    pub fn new() -> Self {
        Self::with_policy(DecidedTapPolicy::default())
    }

    /// Creates a session with an explicit decided-board policy.
    #[instrument]
    pub fn with_policy(policy: DecidedTapPolicy) -> Self {
        Self {
            board: Board::new(),
            active_player: Mark::X,
            score: Score::default(),
            policy,
            watcher: TurnWatcher::new(),
            events: VecDeque::with_capacity(EVENT_CAPACITY),
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the mark that plays next.
    pub fn active_player(&self) -> Mark {
        self.active_player
    }

    /// Returns the match score.
    pub fn score(&self) -> Score {
        self.score
    }

    /// Returns the decided-board policy.
    pub fn policy(&self) -> DecidedTapPolicy {
        self.policy
    }

    /// Derives the turn state from the current board.
    pub fn turn_state(&self) -> TurnState {
        self.board.evaluate()
    }

    /// Returns the cell at `row`, `column`.
    ///
    /// # Panics
    ///
    /// Panics if either coordinate is outside `0..=2`.
    #[track_caller]
    pub fn get(&self, row: usize, column: usize) -> Cell {
        self.board.get(row, column)
    }

    /// Applies a tap at `row`, `column`.
    ///
    /// # Panics
    ///
    /// Panics if either coordinate is outside `0..=2`. Input layers map
    /// screen coordinates onto the board before calling in.
    #[track_caller]
    pub fn apply_move(&mut self, row: usize, column: usize) -> MoveOutcome {
        let Some(pos) = Position::from_row_column(row, column) else {
            panic!("cell ({row}, {column}) is outside the 3x3 board");
        };
        self.play(pos)
    }

    /// Applies a tap at `pos`.
    ///
    /// - On a decided board the board is cleared (score kept) and, under
    ///   [`DecidedTapPolicy::ClearOnly`], the tap goes no further.
    /// - On an occupied cell nothing changes.
    /// - Otherwise the active mark is placed and the turn passes.
    #[instrument(skip(self), fields(active = %self.active_player, policy = %self.policy))]
    pub fn play(&mut self, pos: Position) -> MoveOutcome {
        if self.turn_state().is_decided() {
            self.clear_board();
            return match self.policy {
                DecidedTapPolicy::ClearOnly => MoveOutcome::Cleared,
                DecidedTapPolicy::ClearAndPlace => {
                    self.place(pos);
                    MoveOutcome::ClearedAndPlaced
                }
            };
        }

        if !self.board.is_empty(pos) {
            debug!(?pos, "Cell already occupied, ignoring tap");
            self.push_event(SessionEvent::MoveIgnored { position: pos });
            return MoveOutcome::Occupied;
        }

        self.place(pos);
        MoveOutcome::Placed
    }

    /// Starts a new match: empty board, X to move, score zeroed.
    #[instrument(skip(self), fields(score = %self.score))]
    pub fn reset(&mut self) {
        info!("Resetting match");
        self.board = Board::new();
        self.active_player = Mark::X;
        self.score = Score::default();
        self.push_event(SessionEvent::MatchReset);
        self.observe();
    }

    /// Feeds the current turn state to the watcher.
    ///
    /// The score changes only when this reports a fresh `GameWon` edge, so
    /// calling it again on an unchanged board is harmless.
    #[instrument(level = "debug", skip(self))]
    pub fn observe(&mut self) -> Option<SessionEvent> {
        let event = self.watcher.observe(self.turn_state())?;
        if let SessionEvent::GameWon { winner, line } = event {
            self.score.record(winner);
            info!(%winner, ?line, score = %self.score, "Round won");
        }
        self.push_event(event);
        Some(event)
    }

    /// Events queued since the last drain, oldest first.
    ///
    /// At most [`EVENT_CAPACITY`] are kept, so callers that never drain
    /// only lose history.
    pub fn pending_events(
        &self,
    ) -> impl ExactSizeIterator<Item = &SessionEvent> + DoubleEndedIterator {
        self.events.iter()
    }

    /// Takes the queued events.
    pub fn drain_events(&mut self) -> Vec<SessionEvent> {
        self.events.drain(..).collect()
    }

    /// Copies the observable state.
    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            board: *self.board.cells(),
            active_player: self.active_player,
            turn_state: self.turn_state(),
            score: self.score,
        }
    }

    fn push_event(&mut self, event: SessionEvent) {
        if self.events.len() == EVENT_CAPACITY {
            self.events.pop_front();
        }
        self.events.push_back(event);
    }

    fn place(&mut self, pos: Position) {
        let mark = self.active_player;
        self.board.set(pos, Cell::Occupied(mark));
        self.active_player = mark.opponent();
        debug!(?pos, %mark, "Mark placed");
        self.push_event(SessionEvent::MarkPlaced {
            mark,
            position: pos,
        });
        self.observe();
    }

    // Turn order carries over into the next round.
    fn clear_board(&mut self) {
        debug!(state = %self.turn_state(), "Clearing decided board");
        self.board = Board::new();
        self.push_event(SessionEvent::BoardCleared);
        self.observe();
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}
