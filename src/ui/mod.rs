pub mod render;

use ratatui::prelude::*;
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::app::Mode;
use crate::{Cell, Game};

pub fn draw_frame(frame: &mut Frame, game: &Game, mode: Mode) {
    let area = frame.size();
    let bounds = game.board.bounds;

    // The board keeps its startup shape; if the window shrank underneath it,
    // show a notice instead of a torn frame.
    if (area.width as usize) < bounds.width || (area.height as usize) < bounds.height {
        let msg = Paragraph::new(format!(
            "RESIZE TERMINAL (board needs {}x{})",
            bounds.width, bounds.height
        ))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("ROAM"));
        frame.render_widget(msg, area);
        return;
    }

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(bounds.height as u16), Constraint::Min(1)])
        .split(area);

    let lines: Vec<Line> = render::board_lines(&game.board)
        .into_iter()
        .map(Line::raw)
        .collect();
    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Left), rows[0]);

    draw_status(frame, game, mode, rows[1]);
}

fn draw_status(frame: &mut Frame, game: &Game, mode: Mode, area: Rect) {
    let p = game.position();
    let hint = match mode {
        Mode::Walk => "arrows move · q quits",
        Mode::Drift => "q quits",
    };
    let status = Paragraph::new(Line::raw(format!(
        "{} {} @ ({}, {})   {}",
        mode.label(),
        Cell::Entity(game.facing()).glyph(),
        p.x,
        p.y,
        hint
    )))
    .alignment(Alignment::Left);
    frame.render_widget(status, area);
}
