//! Core domain types for the board.

use super::position::Position;
use super::rules::{self, TurnState};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::instrument;

/// A mark a player puts on the board.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display,
)]
pub enum Mark {
    /// Mark X (moves first).
    X,
    /// Mark O.
    O,
}

impl Mark {
    /// Returns the other mark.
    pub fn opponent(self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }
}

/// A single cell of the board.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    /// Nobody has played here yet.
    #[default]
    Empty,
    /// Cell holds a mark.
    Occupied(Mark),
}

impl Cell {
    /// Returns the mark in this cell, if any.
    pub fn mark(self) -> Option<Mark> {
        match self {
            Cell::Empty => None,
            Cell::Occupied(mark) => Some(mark),
        }
    }

    /// Checks if the cell is empty.
    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }

    fn symbol(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::Occupied(Mark::X) => 'X',
            Cell::Occupied(Mark::O) => 'O',
        }
    }
}

impl From<Mark> for Cell {
    fn from(mark: Mark) -> Self {
        Cell::Occupied(mark)
    }
}

/// 3x3 board.
///
/// Cells are stored row-major, `index = row * 3 + column`. The turn state is
/// never stored; [`Board::evaluate`] derives it from the cells on demand.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    cells: [Cell; 9],
}

impl Board {
    /// Creates an empty board.
    pub fn new() -> Self {
        Self {
            cells: [Cell::Empty; 9],
        }
    }

    /// Builds a board from cells in row-major order.
    pub fn from_cells(cells: [Cell; 9]) -> Self {
        Self { cells }
    }

    /// Returns the cell at `row`, `column`.
    ///
    /// # Panics
    ///
    /// Panics if `row` or `column` is outside `0..=2`. Callers map input
    /// coordinates to the board before asking for a cell.
    #[track_caller]
    pub fn get(&self, row: usize, column: usize) -> Cell {
        assert!(
            row < 3 && column < 3,
            "cell ({row}, {column}) is outside the 3x3 board"
        );
        self.cells[row * 3 + column]
    }

    /// Returns the cell at the given position.
    pub fn cell(&self, pos: Position) -> Cell {
        self.cells[pos.index()]
    }

    /// Sets the cell at the given position.
    pub fn set(&mut self, pos: Position, cell: Cell) {
        self.cells[pos.index()] = cell;
    }

    /// Checks if the cell at `pos` is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.cell(pos).is_empty()
    }

    /// Returns all cells in row-major order.
    pub fn cells(&self) -> &[Cell; 9] {
        &self.cells
    }

    /// Positions that can still be played.
    pub fn empty_positions(&self) -> Vec<Position> {
        Position::ALL
            .iter()
            .copied()
            .filter(|pos| self.is_empty(*pos))
            .collect()
    }

    /// Checks if every cell holds a mark.
    pub fn is_full(&self) -> bool {
        rules::is_full(self)
    }

    /// Derives the turn state of this board.
    #[instrument(level = "trace", skip(self))]
    pub fn evaluate(&self) -> TurnState {
        rules::evaluate(self)
    }
}

impl std::fmt::Display for Board {
    /// Renders `X|O|3` rows separated by `-+-+-`, numbering empty cells 1-9.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 0..3 {
            for column in 0..3 {
                let index = row * 3 + column;
                match self.cells[index] {
                    Cell::Empty => write!(f, "{}", index + 1)?,
                    Cell::Occupied(mark) => write!(f, "{mark}")?,
                }
                if column < 2 {
                    f.write_str("|")?;
                }
            }
            if row < 2 {
                f.write_str("\n-+-+-\n")?;
            }
        }
        Ok(())
    }
}

/// Error parsing a compact board string.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ParseBoardError {
    /// The string did not describe exactly nine cells.
    #[display("Expected 9 cells, found {found}")]
    WrongLength {
        /// Number of cells found.
        found: usize,
    },
    /// A character was not `X`, `O` or `.`.
    #[display("Invalid cell symbol {symbol:?}")]
    InvalidSymbol {
        /// The offending character.
        symbol: char,
    },
}

impl FromStr for Board {
    type Err = ParseBoardError;

    /// Parses nine cells written as `X`, `O` or `.` (also `-` or `_` for
    /// empty). Whitespace, `|` and `/` are ignored so `"XOX/OXO/OXO"` works.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut cells = Vec::with_capacity(9);
        for symbol in s.chars() {
            let cell = match symbol {
                c if c.is_whitespace() || c == '|' || c == '/' => continue,
                'X' | 'x' => Cell::Occupied(Mark::X),
                'O' | 'o' => Cell::Occupied(Mark::O),
                '.' | '-' | '_' => Cell::Empty,
                _ => return Err(ParseBoardError::InvalidSymbol { symbol }),
            };
            cells.push(cell);
        }

        let found = cells.len();
        let cells: [Cell; 9] = cells
            .try_into()
            .map_err(|_| ParseBoardError::WrongLength { found })?;
        Ok(Self { cells })
    }
}

impl Board {
    /// Compact form accepted by `FromStr`, rows joined with `/`.
    pub fn to_compact(&self) -> String {
        self.cells
            .chunks(3)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("/")
    }
}
