//! Cumulative wins across rounds.

use serde::{Deserialize, Serialize};
use tapgrid_rules::Mark;

/// Wins per mark since the last match reset.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Score {
    /// Rounds won by X.
    pub x_wins: u32,
    /// Rounds won by O.
    pub o_wins: u32,
}

impl Score {
    /// Creates a score from explicit counters.
    pub fn new(x_wins: u32, o_wins: u32) -> Self {
        Self { x_wins, o_wins }
    }

    /// Counts one round won by `mark`.
    pub fn record(&mut self, mark: Mark) {
        match mark {
            Mark::X => self.x_wins += 1,
            Mark::O => self.o_wins += 1,
        }
    }

    /// Rounds won by `mark`.
    pub fn wins(&self, mark: Mark) -> u32 {
        match mark {
            Mark::X => self.x_wins,
            Mark::O => self.o_wins,
        }
    }

    /// Rounds won by either mark. Draws are not counted.
    pub fn total(&self) -> u32 {
        self.x_wins + self.o_wins
    }
}

impl std::fmt::Display for Score {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "X - {}  O - {}", self.x_wins, self.o_wins)
    }
}
