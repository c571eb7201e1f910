//! Win detection logic for tic-tac-toe.

use super::super::{Board, Cell, Mark, Position};
use tracing::instrument;

/// Every line that wins the game: rows top to bottom, columns left to
/// right, then the two diagonals. The order is the tie-break.
pub const WIN_LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [Position::MiddleLeft, Position::Center, Position::MiddleRight],
    [Position::BottomLeft, Position::BottomCenter, Position::BottomRight],
    // Columns
    [Position::TopLeft, Position::MiddleLeft, Position::BottomLeft],
    [Position::TopCenter, Position::Center, Position::BottomCenter],
    [Position::TopRight, Position::MiddleRight, Position::BottomRight],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// Finds the first completed line in table order.
#[instrument(level = "trace", skip(board))]
pub fn find_winning_line(board: &Board) -> Option<(Mark, [Position; 3])> {
    WIN_LINES.into_iter().find_map(|line @ [a, b, c]| {
        let cell = board.cell(a);
        match cell {
            Cell::Occupied(mark) if cell == board.cell(b) && cell == board.cell(c) => {
                Some((mark, line))
            }
            _ => None,
        }
    })
}

/// Checks if there is a winner on the board.
///
/// Returns `Some(mark)` if a mark has three in a row, `None` otherwise.
pub fn check_winner(board: &Board) -> Option<Mark> {
    find_winning_line(board).map(|(mark, _)| mark)
}
