//! Game rules for tic-tac-toe.
//!
//! This module contains pure functions for evaluating a board. Rules are
//! separated from board storage so the session layer can derive the turn
//! state after every change instead of tracking it.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::{WIN_LINES, check_winner, find_winning_line};

use super::{Board, Mark, Position};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Classification of a board.
///
/// Always derived from a [`Board`] with [`evaluate`]; never stored on its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TurnState {
    /// No completed line and at least one empty cell.
    Running,
    /// No completed line and no empty cell.
    Draw,
    /// `line` holds three equal marks.
    Won {
        /// Mark that completed the line.
        winner: Mark,
        /// The completed line, in win-line table order.
        line: [Position; 3],
    },
}

impl TurnState {
    /// Checks if moves can still be played.
    pub fn is_running(&self) -> bool {
        matches!(self, TurnState::Running)
    }

    /// Checks if the board is won or drawn.
    pub fn is_decided(&self) -> bool {
        !self.is_running()
    }

    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Mark> {
        match self {
            TurnState::Won { winner, .. } => Some(*winner),
            _ => None,
        }
    }

    /// Returns the winning line if there is one.
    pub fn line(&self) -> Option<[Position; 3]> {
        match self {
            TurnState::Won { line, .. } => Some(*line),
            _ => None,
        }
    }

    /// Winning line as board indices.
    pub fn line_indices(&self) -> Option<[usize; 3]> {
        self.line().map(|line| line.map(Position::index))
    }

    /// Checks if `pos` is part of the winning line.
    pub fn contains(&self, pos: Position) -> bool {
        self.line().is_some_and(|line| line.contains(&pos))
    }
}

impl std::fmt::Display for TurnState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TurnState::Running => write!(f, "Running"),
            TurnState::Draw => write!(f, "Draw"),
            TurnState::Won { winner, line } => {
                let [a, b, c] = line.map(Position::index);
                write!(f, "{winner} wins on {{{a},{b},{c}}}")
            }
        }
    }
}

/// Derives the turn state of a board.
///
/// The first completed line in [`WIN_LINES`] order wins, so a move that
/// completes two lines at once reports the earlier one. Total over every
/// board, reachable or not; no legality is enforced here.
#[instrument(level = "trace", skip(board))]
pub fn evaluate(board: &Board) -> TurnState {
    if let Some((winner, line)) = find_winning_line(board) {
        return TurnState::Won { winner, line };
    }

    if is_full(board) {
        TurnState::Draw
    } else {
        TurnState::Running
    }
}
