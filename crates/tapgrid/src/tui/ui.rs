//! Stateless UI rendering.

use super::app::App;
use super::layout::{Orientation, cell_rect};
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Padding, Paragraph, Wrap},
};
use tapgrid_rules::{Cell, Mark, Position, TurnState};

/// Renders score, board and hints for the current orientation.
pub fn draw(frame: &mut Frame, app: &App) {
    let layout = app.layout();

    draw_score(frame, layout.score, app, layout.orientation);
    draw_board(frame, layout.board, app);
    draw_hint(frame, layout.hint, app);
}

fn draw_score(frame: &mut Frame, area: Rect, app: &App, orientation: Orientation) {
    let session = app.session();
    let score = session.score();
    let running = session.turn_state().is_running();

    let entry = |mark: Mark| {
        let mut style = mark_style(mark).add_modifier(Modifier::BOLD);
        if running && session.active_player() == mark {
            style = style.add_modifier(Modifier::UNDERLINED);
        }
        Span::styled(
            format!("{} - {}", app.glyphs().for_mark(mark), score.wins(mark)),
            style,
        )
    };

    let lines = match orientation {
        Orientation::Portrait => vec![Line::from(vec![
            entry(Mark::X),
            Span::raw("     "),
            entry(Mark::O),
        ])],
        Orientation::Landscape => vec![
            Line::from(entry(Mark::X)),
            Line::raw(""),
            Line::from(entry(Mark::O)),
        ],
    };

    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Score"));
    frame.render_widget(paragraph, area);
}

fn draw_board(frame: &mut Frame, board_area: Rect, app: &App) {
    let session = app.session();
    let state = session.turn_state();

    for pos in Position::ALL {
        draw_cell(frame, cell_rect(board_area, pos), app, &state, pos);
    }
}

fn draw_cell(frame: &mut Frame, area: Rect, app: &App, state: &TurnState, pos: Position) {
    let cell = app.session().board().cell(pos);

    let (symbol, mut style) = match cell {
        Cell::Empty => (String::new(), Style::default()),
        Cell::Occupied(mark) => (
            app.glyphs().for_mark(mark).to_string(),
            mark_style(mark).add_modifier(Modifier::BOLD),
        ),
    };

    let mut border_style = Style::default().fg(Color::DarkGray);
    if state.contains(pos) {
        style = style.fg(Color::Red);
        border_style = border_style.fg(Color::Red);
    }
    if pos == app.cursor() {
        style = style.add_modifier(Modifier::REVERSED);
    }

    // Vertically center the glyph inside the borders.
    let inner_height = area.height.saturating_sub(2);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style)
        .padding(Padding::top(inner_height.saturating_sub(1) / 2));

    let paragraph = Paragraph::new(Line::from(Span::styled(format!(" {symbol} "), style)))
        .alignment(Alignment::Center)
        .block(block);
    frame.render_widget(paragraph, area);
}

fn draw_hint(frame: &mut Frame, area: Rect, app: &App) {
    let lines = vec![
        Line::from(Span::styled(
            app.status_message().to_string(),
            Style::default().fg(Color::Yellow),
        )),
        Line::from(Span::styled(
            "click/1-9/arrows+enter: tap  r: reset  q: quit",
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(paragraph, area);
}

fn mark_style(mark: Mark) -> Style {
    match mark {
        Mark::X => Style::default().fg(Color::Blue),
        Mark::O => Style::default().fg(Color::Magenta),
    }
}
