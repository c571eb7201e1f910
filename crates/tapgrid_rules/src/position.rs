//! Named cell positions on the board.

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::instrument;

/// A position on the board (0-8, row-major).
///
/// Out-of-range coordinates never produce a `Position`, so every operation
/// taking one is total.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
    strum::EnumIter,
)]
pub enum Position {
    /// Top-left (position 0)
    TopLeft,
    /// Top-center (position 1)
    TopCenter,
    /// Top-right (position 2)
    TopRight,
    /// Middle-left (position 3)
    MiddleLeft,
    /// Center (position 4)
    Center,
    /// Middle-right (position 5)
    MiddleRight,
    /// Bottom-left (position 6)
    BottomLeft,
    /// Bottom-center (position 7)
    BottomCenter,
    /// Bottom-right (position 8)
    BottomRight,
}

impl Position {
    /// All 9 positions in index order.
    pub const ALL: [Position; 9] = [
        Position::TopLeft,
        Position::TopCenter,
        Position::TopRight,
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ];

    /// Get label for this position (for display).
    pub fn label(self) -> &'static str {
        match self {
            Position::TopLeft => "Top-left",
            Position::TopCenter => "Top-center",
            Position::TopRight => "Top-right",
            Position::MiddleLeft => "Middle-left",
            Position::Center => "Center",
            Position::MiddleRight => "Middle-right",
            Position::BottomLeft => "Bottom-left",
            Position::BottomCenter => "Bottom-center",
            Position::BottomRight => "Bottom-right",
        }
    }

    /// Converts position to board index (0-8).
    pub fn index(self) -> usize {
        self as usize
    }

    /// Row of this position (0-2).
    pub fn row(self) -> usize {
        self.index() / 3
    }

    /// Column of this position (0-2).
    pub fn column(self) -> usize {
        self.index() % 3
    }

    /// Creates position from board index.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Creates position from row and column, `None` if either is past 2.
    #[instrument(level = "trace")]
    pub fn from_row_column(row: usize, column: usize) -> Option<Self> {
        if row < 3 && column < 3 {
            Self::from_index(row * 3 + column)
        } else {
            None
        }
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Error parsing a position from text.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ParsePositionError {
    /// Row or column outside the board.
    #[display("Row {row} and column {column} must both be in 0..=2")]
    OutOfRange {
        /// Requested row.
        row: usize,
        /// Requested column.
        column: usize,
    },
    /// Single index outside the board.
    #[display("Index {index} must be in 0..=8")]
    IndexOutOfRange {
        /// Requested index.
        index: usize,
    },
    /// Neither coordinates, an index nor a label.
    #[display("Unrecognized position {input:?}")]
    Unrecognized {
        /// Trimmed input text.
        input: String,
    },
}

impl FromStr for Position {
    type Err = ParsePositionError;

    /// Accepts `"row,column"`, a single index `0-8`, or a label such as
    /// `"top-left"` (case-insensitive).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let input = s.trim();
        let unrecognized = || ParsePositionError::Unrecognized {
            input: input.to_string(),
        };

        if let Some((row, column)) = input.split_once(',') {
            let row: usize = row.trim().parse().map_err(|_| unrecognized())?;
            let column: usize = column.trim().parse().map_err(|_| unrecognized())?;
            return Self::from_row_column(row, column)
                .ok_or(ParsePositionError::OutOfRange { row, column });
        }

        if let Ok(index) = input.parse::<usize>() {
            return Self::from_index(index).ok_or(ParsePositionError::IndexOutOfRange { index });
        }

        <Position as strum::IntoEnumIterator>::iter()
            .find(|pos| pos.label().eq_ignore_ascii_case(input))
            .ok_or_else(unrecognized)
    }
}
