use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Paragraph, Wrap},
    Frame,
};

use super::themed;
use crate::app::AppState;

const BACKGROUND: Color = Color::Rgb(0xFF, 0xF8, 0xE1);
const TITLE: Color = Color::Rgb(0xBF, 0x36, 0x0C);
const BUTTON: Color = Color::Rgb(0x4C, 0xAF, 0x50);

/// Title, greeting and the button, centered on a warm background
pub(super) fn render_home(
    frame: &mut Frame,
    area: Rect,
    state: &AppState,
    title: &str,
    greeting: &str,
    button: &str,
) {
    frame.render_widget(
        Block::default().style(themed(state, Style::default().bg(BACKGROUND))),
        area,
    );

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Fill(1),
            Constraint::Length(7),
            Constraint::Fill(1),
        ])
        .split(area);

    let lines = vec![
        Line::from(Span::styled(
            title.to_string(),
            themed(state, Style::default().fg(TITLE).add_modifier(Modifier::BOLD)),
        )),
        Line::from(""),
        Line::from(Span::styled(
            greeting.to_string(),
            themed(state, Style::default().fg(Color::Black)),
        )),
        Line::from(""),
        Line::from(""),
        Line::from(Span::styled(
            format!("[ {} ]", button),
            themed(
                state,
                Style::default().fg(Color::White).bg(BUTTON).add_modifier(Modifier::BOLD),
            ),
        )),
    ];

    let content = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });

    frame.render_widget(content, rows[1]);
}
