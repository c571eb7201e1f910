//! Tests for the game session: moves, rounds, score and resets.

use tapgrid::{
    Board, Cell, DecidedTapPolicy, EVENT_CAPACITY, GameSession, Mark, MoveOutcome, Position,
    Score, SessionEvent, TurnState,
};

/// X takes the top row while O plays center and bottom-right.
const X_WINS_TOP_ROW: [(usize, usize); 5] = [(0, 0), (1, 1), (0, 1), (2, 2), (0, 2)];

/// Fills the board as X O X / X O O / O X X in alternating turns with no
/// line completed along the way.
const DRAW: [(usize, usize); 9] = [
    (0, 0), // X
    (1, 1), // O
    (2, 2), // X
    (0, 1), // O
    (2, 1), // X
    (1, 2), // O
    (1, 0), // X
    (2, 0), // O
    (0, 2), // X
];

fn play_all(session: &mut GameSession, taps: &[(usize, usize)]) {
    for &(row, column) in taps {
        session.apply_move(row, column);
    }
}

#[test]
fn test_x_wins_top_row() {
    let mut session = GameSession::new();
    play_all(&mut session, &X_WINS_TOP_ROW);

    assert_eq!(
        session.turn_state(),
        TurnState::Won {
            winner: Mark::X,
            line: [Position::TopLeft, Position::TopCenter, Position::TopRight],
        }
    );
    assert_eq!(session.turn_state().line_indices(), Some([0, 1, 2]));
    assert_eq!(session.score(), Score::new(1, 0));
}

#[test]
fn test_draw_leaves_score_unchanged() {
    let mut session = GameSession::new();
    play_all(&mut session, &DRAW);

    assert_eq!(session.board(), &"XOX/XOO/OXX".parse::<Board>().unwrap());
    assert_eq!(session.turn_state(), TurnState::Draw);
    assert_eq!(session.score(), Score::default());
    assert!(session.drain_events().contains(&SessionEvent::GameDrawn));
}

#[test]
fn test_tap_on_drawn_board_clears_without_placing() {
    let mut session = GameSession::new();
    play_all(&mut session, &DRAW);
    let before = session.active_player();

    assert_eq!(session.apply_move(0, 0), MoveOutcome::Cleared);
    assert_eq!(session.board(), &Board::new());
    assert_eq!(session.get(0, 0), Cell::Empty);
    assert_eq!(session.score(), Score::default());
    assert_eq!(session.active_player(), before);
    assert_eq!(session.turn_state(), TurnState::Running);
}

#[test]
fn test_tap_on_won_board_keeps_score() {
    let mut session = GameSession::new();
    play_all(&mut session, &X_WINS_TOP_ROW);

    assert_eq!(session.apply_move(2, 0), MoveOutcome::Cleared);
    assert_eq!(session.board(), &Board::new());
    assert_eq!(session.score(), Score::new(1, 0));
}

#[test]
fn test_clear_and_place_plays_the_clearing_tap() {
    // Alternate policy: the tap that clears the board also opens the next round.
    let mut session = GameSession::with_policy(DecidedTapPolicy::ClearAndPlace);
    play_all(&mut session, &X_WINS_TOP_ROW);
    let opener = session.active_player();

    assert_eq!(session.apply_move(1, 1), MoveOutcome::ClearedAndPlaced);
    assert_eq!(session.get(1, 1), Cell::Occupied(opener));
    assert_eq!(session.board().empty_positions().len(), 8);
    assert_eq!(session.active_player(), opener.opponent());
    assert_eq!(session.score(), Score::new(1, 0));
}

#[test]
fn test_move_on_empty_cell_flips_turn_and_keeps_score() {
    let mut session = GameSession::new();
    for (i, pos) in [Position::Center, Position::TopLeft, Position::BottomRight]
        .into_iter()
        .enumerate()
    {
        let mover = session.active_player();
        assert_eq!(mover, if i % 2 == 0 { Mark::X } else { Mark::O });
        assert_eq!(session.play(pos), MoveOutcome::Placed);
        assert_eq!(session.board().cell(pos), Cell::Occupied(mover));
        assert_eq!(session.active_player(), mover.opponent());
        assert_eq!(session.score(), Score::default());
    }
}

#[test]
fn test_move_on_occupied_cell_changes_nothing() {
    let mut session = GameSession::new();
    play_all(&mut session, &[(1, 1), (0, 0)]);
    let board = session.board().clone();
    let active = session.active_player();
    session.drain_events();

    assert_eq!(session.apply_move(1, 1), MoveOutcome::Occupied);
    assert_eq!(session.apply_move(0, 0), MoveOutcome::Occupied);
    assert_eq!(session.board(), &board);
    assert_eq!(session.active_player(), active);
    assert_eq!(session.score(), Score::default());
    assert_eq!(
        session.drain_events(),
        vec![
            SessionEvent::MoveIgnored { position: Position::Center },
            SessionEvent::MoveIgnored { position: Position::TopLeft },
        ]
    );
}

#[test]
fn test_reobserving_won_state_does_not_rescore() {
    let mut session = GameSession::new();
    play_all(&mut session, &X_WINS_TOP_ROW);
    assert_eq!(session.score(), Score::new(1, 0));

    for _ in 0..5 {
        assert_eq!(session.observe(), None);
        let _ = session.turn_state();
        let _ = session.snapshot();
    }
    assert_eq!(session.score(), Score::new(1, 0));

    let wins = session
        .drain_events()
        .into_iter()
        .filter(|e| matches!(e, SessionEvent::GameWon { .. }))
        .count();
    assert_eq!(wins, 1);
}

#[test]
fn test_one_increment_per_completed_game() {
    let mut session = GameSession::new();

    // Round 1: X wins. Turn passes to O for the next round.
    play_all(&mut session, &X_WINS_TOP_ROW);
    session.apply_move(0, 0);
    assert_eq!(session.active_player(), Mark::O);

    // Round 2: O takes the left column.
    play_all(&mut session, &[(0, 0), (1, 1), (1, 0), (2, 2), (2, 0)]);
    assert_eq!(session.turn_state().winner(), Some(Mark::O));
    assert_eq!(session.score(), Score::new(1, 1));

    // Taps on the decided board clear it; the second tap starts round 3.
    session.apply_move(1, 1);
    session.apply_move(1, 1);
    assert_eq!(session.score(), Score::new(1, 1));
    assert_eq!(session.board().empty_positions().len(), 8);
}

#[test]
fn test_reset_starts_new_match() {
    let mut session = GameSession::new();
    play_all(&mut session, &X_WINS_TOP_ROW);
    session.apply_move(0, 0);
    session.apply_move(1, 1);

    session.reset();

    assert_eq!(session.board(), &Board::new());
    assert_eq!(session.active_player(), Mark::X);
    assert_eq!(session.score(), Score::default());
    assert_eq!(session.turn_state(), TurnState::Running);
    assert_eq!(session.pending_events().last(), Some(&SessionEvent::MatchReset));
}

#[test]
fn test_reset_from_won_board_rearms_scoring() {
    let mut session = GameSession::new();
    play_all(&mut session, &X_WINS_TOP_ROW);
    session.reset();
    play_all(&mut session, &X_WINS_TOP_ROW);
    assert_eq!(session.score(), Score::new(1, 0));
}

#[test]
fn test_snapshot_exposes_outbound_state() {
    let mut session = GameSession::new();
    play_all(&mut session, &X_WINS_TOP_ROW);

    let snapshot = session.snapshot();
    assert_eq!(&snapshot.board, session.board().cells());
    assert_eq!(snapshot.active_player, Mark::O);
    assert_eq!(snapshot.turn_state.winner(), Some(Mark::X));
    assert_eq!(snapshot.score, Score::new(1, 0));

    let json = serde_json::to_value(&snapshot).unwrap();
    assert_eq!(json["score"], serde_json::json!({ "x_wins": 1, "o_wins": 0 }));
    assert_eq!(json["active_player"], "O");
}

#[test]
fn test_long_match_without_draining_keeps_bounded_events() {
    let mut session = GameSession::new();
    for round in 0..2_000 {
        play_all(&mut session, &X_WINS_TOP_ROW);
        session.apply_move(1, 1);
        if round % 500 == 0 {
            session.reset();
        }
    }

    assert!(session.pending_events().len() <= EVENT_CAPACITY);
    assert_eq!(session.turn_state(), TurnState::Running);
}

#[test]
#[should_panic(expected = "outside the 3x3 board")]
fn test_get_out_of_range_panics() {
    GameSession::new().get(3, 0);
}

#[test]
#[should_panic(expected = "outside the 3x3 board")]
fn test_apply_move_out_of_range_panics() {
    GameSession::new().apply_move(0, 3);
}
