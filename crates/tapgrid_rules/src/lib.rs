//! Board and rules engine for tap-to-play tic-tac-toe.
//!
//! The board is a fixed 3x3 grid of [`Cell`]s. Whether a board is still
//! running, drawn or won is a pure function of its cells ([`evaluate`]),
//! so callers never keep a separate status that could drift.
//!
//! ```
//! use tapgrid_rules::{Board, Mark, Position, TurnState};
//!
//! let board: Board = "XXX/OO./...".parse().unwrap();
//! assert_eq!(
//!     board.evaluate(),
//!     TurnState::Won {
//!         winner: Mark::X,
//!         line: [Position::TopLeft, Position::TopCenter, Position::TopRight],
//!     }
//! );
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod position;
pub mod rules;
mod types;

pub use position::{ParsePositionError, Position};
pub use rules::{TurnState, WIN_LINES, evaluate};
pub use types::{Board, Cell, Mark, ParseBoardError};
