//! Keyboard and mouse input mapped to game actions.

use super::layout::cell_at;
use crossterm::event::{KeyCode, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Rect;
use tapgrid_rules::Position;

/// What the user asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Tap a cell.
    Tap(Position),
    /// Tap the cell under the cursor.
    TapCursor,
    /// Move the cursor.
    MoveCursor(Position),
    /// Start a new match.
    Reset,
    /// Leave the game.
    Quit,
}

/// Moves cursor based on arrow keys, stopping at the edges.
pub fn move_cursor(cursor: Position, key: KeyCode) -> Position {
    let (row, column) = (cursor.row(), cursor.column());
    let target = match key {
        KeyCode::Left | KeyCode::Char('h') => {
            Position::from_row_column(row, column.wrapping_sub(1))
        }
        KeyCode::Right | KeyCode::Char('l') => Position::from_row_column(row, column + 1),
        KeyCode::Up | KeyCode::Char('k') => Position::from_row_column(row.wrapping_sub(1), column),
        KeyCode::Down | KeyCode::Char('j') => Position::from_row_column(row + 1, column),
        _ => None,
    };
    target.unwrap_or(cursor)
}

/// Maps a key press to an action.
pub fn key_action(cursor: Position, key: KeyCode) -> Option<Action> {
    match key {
        KeyCode::Char('q') | KeyCode::Esc => Some(Action::Quit),
        KeyCode::Char('r') => Some(Action::Reset),
        KeyCode::Enter | KeyCode::Char(' ') => Some(Action::TapCursor),
        KeyCode::Char(c @ '1'..='9') => {
            let index = c.to_digit(10)? as usize - 1;
            Position::from_index(index).map(Action::Tap)
        }
        KeyCode::Left
        | KeyCode::Right
        | KeyCode::Up
        | KeyCode::Down
        | KeyCode::Char('h' | 'j' | 'k' | 'l') => {
            Some(Action::MoveCursor(move_cursor(cursor, key)))
        }
        _ => None,
    }
}

/// Maps a left-button press inside `board` to a tap.
pub fn mouse_action(board: Rect, event: MouseEvent) -> Option<Action> {
    match event.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            cell_at(board, event.column, event.row).map(Action::Tap)
        }
        _ => None,
    }
}
