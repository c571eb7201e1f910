//! Orientation-aware screen layout and tap-to-cell mapping.

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use tapgrid_rules::Position;

/// Terminal cells are roughly twice as tall as they are wide.
const CELL_ASPECT: u16 = 2;

/// Smallest board that still shows a glyph inside bordered cells.
const MIN_BOARD_ROWS: u16 = 9;

/// How the score, board and hint panels are arranged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    /// Panels stacked top to bottom.
    Portrait,
    /// Panels side by side.
    Landscape,
}

impl Orientation {
    /// Landscape when the area is visually wider than tall.
    pub fn for_area(area: Rect) -> Self {
        if area.width > area.height.saturating_mul(CELL_ASPECT) {
            Orientation::Landscape
        } else {
            Orientation::Portrait
        }
    }
}

/// Regions of one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenLayout {
    /// Chosen arrangement.
    pub orientation: Orientation,
    /// Score panel.
    pub score: Rect,
    /// Square board, centered in its panel.
    pub board: Rect,
    /// Key hints and status.
    pub hint: Rect,
}

/// Splits `area` into panels for its orientation.
pub fn screen_layout(area: Rect) -> ScreenLayout {
    let orientation = Orientation::for_area(area);

    let chunks = match orientation {
        Orientation::Portrait => Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),              // Score
                Constraint::Min(MIN_BOARD_ROWS),    // Board
                Constraint::Length(4),              // Hint
            ])
            .split(area),
        Orientation::Landscape => Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage(22), // Score
                Constraint::Min(MIN_BOARD_ROWS * CELL_ASPECT),
                Constraint::Percentage(22), // Hint
            ])
            .split(area),
    };

    ScreenLayout {
        orientation,
        score: chunks[0],
        board: square_in(chunks[1]),
        hint: chunks[2],
    }
}

/// Largest visually square rectangle centered in `area`.
pub fn square_in(area: Rect) -> Rect {
    let height = area.height.min(area.width / CELL_ASPECT);
    let width = height * CELL_ASPECT;
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}

/// Start and end offsets of third `i` of a span of `len` cells.
///
/// Bounds are rounded up so they agree exactly with [`cell_at`].
fn third(len: u16, i: u16) -> (u16, u16) {
    let bound = |k: u16| ((u32::from(len) * u32::from(k)).div_ceil(3)) as u16;
    (bound(i), bound(i + 1))
}

/// Screen rectangle of `pos` inside `board`.
pub fn cell_rect(board: Rect, pos: Position) -> Rect {
    let (x0, x1) = third(board.width, pos.column() as u16);
    let (y0, y1) = third(board.height, pos.row() as u16);
    Rect::new(board.x + x0, board.y + y0, x1 - x0, y1 - y0)
}

/// Maps a tap at screen `column`, `row` to a board position.
///
/// The board is split into equal thirds along each axis; a tap outside the
/// board maps to nothing.
pub fn cell_at(board: Rect, column: u16, row: u16) -> Option<Position> {
    if board.width < 3 || board.height < 3 {
        return None;
    }
    let dx = column.checked_sub(board.x).filter(|dx| *dx < board.width)?;
    let dy = row.checked_sub(board.y).filter(|dy| *dy < board.height)?;

    let board_column = u32::from(dx) * 3 / u32::from(board.width);
    let board_row = u32::from(dy) * 3 / u32::from(board.height);
    Position::from_row_column(board_row as usize, board_column as usize)
}
