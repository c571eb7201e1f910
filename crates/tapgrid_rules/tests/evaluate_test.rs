//! Tests for turn state derivation over whole boards.

use tapgrid_rules::{Board, Cell, Mark, Position, TurnState, WIN_LINES, evaluate};

/// Decodes `n` in base 3 into a board: 0 = empty, 1 = X, 2 = O.
fn board_from_code(mut n: u32) -> Board {
    let mut cells = [Cell::Empty; 9];
    for cell in cells.iter_mut() {
        *cell = match n % 3 {
            0 => Cell::Empty,
            1 => Cell::Occupied(Mark::X),
            _ => Cell::Occupied(Mark::O),
        };
        n /= 3;
    }
    Board::from_cells(cells)
}

fn line_complete(board: &Board, line: [Position; 3]) -> Option<Mark> {
    let [a, b, c] = line.map(|pos| board.cell(pos));
    match a {
        Cell::Occupied(mark) if a == b && b == c => Some(mark),
        _ => None,
    }
}

#[test]
fn test_evaluate_is_total_and_consistent_over_all_boards() {
    let mut counts = [0usize; 3];

    for code in 0..3u32.pow(9) {
        let board = board_from_code(code);
        let state = evaluate(&board);
        assert_eq!(state, evaluate(&board), "evaluate must be deterministic");

        let first_complete = WIN_LINES
            .iter()
            .find_map(|line| line_complete(&board, *line).map(|mark| (mark, *line)));
        let has_empty = board.cells().contains(&Cell::Empty);

        match state {
            TurnState::Won { winner, line } => {
                assert_eq!(first_complete, Some((winner, line)), "board {code}");
                counts[0] += 1;
            }
            TurnState::Running => {
                assert!(first_complete.is_none() && has_empty, "board {code}");
                counts[1] += 1;
            }
            TurnState::Draw => {
                assert!(first_complete.is_none() && !has_empty, "board {code}");
                counts[2] += 1;
            }
        }
    }

    assert_eq!(counts.iter().sum::<usize>(), 19_683);
    assert!(counts.iter().all(|&n| n > 0));
}

#[test]
fn test_double_line_reports_first_in_table_order() {
    // X completes the top row and the left column with the corner move.
    let board: Board = "XXX/XO./XO.".parse().unwrap();
    assert_eq!(
        evaluate(&board),
        TurnState::Won {
            winner: Mark::X,
            line: [Position::TopLeft, Position::TopCenter, Position::TopRight],
        }
    );

    // Middle and right columns complete together: middle comes first.
    let board: Board = "XOX/OOX/.OX".parse().unwrap();
    assert_eq!(
        evaluate(&board).line(),
        Some([Position::TopCenter, Position::Center, Position::BottomCenter])
    );
}

#[test]
fn test_rows_win_before_diagonals() {
    let board: Board = "OOO/.O./..O".parse().unwrap();
    assert_eq!(evaluate(&board).line_indices(), Some([0, 1, 2]));
}

#[test]
fn test_unreachable_boards_still_evaluate() {
    // Both marks hold a row; rows are scanned top to bottom.
    let board: Board = "OOO/XXX/...".parse().unwrap();
    assert_eq!(evaluate(&board).winner(), Some(Mark::O));
}

#[test]
fn test_draw_scenario() {
    let board: Board = "XOX/OXO/OXO".parse().unwrap();
    assert_eq!(evaluate(&board), TurnState::Draw);
}

#[test]
fn test_turn_state_serializes_line() {
    let state = TurnState::Won {
        winner: Mark::X,
        line: WIN_LINES[6],
    };
    let json = serde_json::to_value(state).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "Won": { "winner": "X", "line": ["TopLeft", "Center", "BottomRight"] }
        })
    );
}
