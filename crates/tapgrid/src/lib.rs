//! Tap-to-play tic-tac-toe with score tracking across rounds.
//!
//! # Architecture
//!
//! - **Rules**: board, positions and turn state live in [`tapgrid_rules`].
//! - **Session**: [`GameSession`] owns the board, the mark to move and the
//!   match [`Score`]. Taps and resets are the only mutations.
//! - **Events**: a [`TurnWatcher`] turns successive turn states into
//!   edge-triggered [`SessionEvent`]s; the score moves only on `GameWon`.
//! - **Front ends**: a terminal UI ([`tui`]) and a headless [`replay`].
//!
//! # Example
//!
//! ```
//! use tapgrid::{GameSession, MoveOutcome, Score};
//!
//! let mut session = GameSession::new();
//! for (row, column) in [(0, 0), (1, 1), (0, 1), (2, 2), (0, 2)] {
//!     assert_eq!(session.apply_move(row, column), MoveOutcome::Placed);
//! }
//! assert_eq!(session.score(), Score::new(1, 0));
//!
//! // The next tap only clears the decided board.
//! assert_eq!(session.apply_move(0, 0), MoveOutcome::Cleared);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
mod events;
pub mod replay;
mod score;
mod session;
pub mod tui;

pub use config::{AppConfig, ConfigError, DEFAULT_CONFIG_PATH, Glyphs};
pub use events::{SessionEvent, TurnWatcher};
pub use score::Score;
pub use session::{DecidedTapPolicy, EVENT_CAPACITY, GameSession, MoveOutcome, SessionSnapshot};

pub use tapgrid_rules::{Board, Cell, Mark, Position, TurnState};
