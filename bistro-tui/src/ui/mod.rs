//! UI rendering
//!
//! Render functions read `AppState` and draw; they never mutate it.

mod home;
mod meals;

use libbistro::{RouteView, Tab};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Tabs, Wrap},
    Frame,
};

use crate::app::AppState;

/// Render the application UI
///
/// Main rendering entry point: content, bottom tab bar, status line.
pub fn render(frame: &mut Frame, state: &AppState) {
    let area = frame.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(3),    // Route content
            Constraint::Length(3), // Tab bar
            Constraint::Length(1), // Status line
        ])
        .split(area);

    match state.view() {
        RouteView::Home {
            title,
            greeting,
            button,
        } => home::render_home(frame, chunks[0], state, title, greeting, button),
        RouteView::List { meals } => meals::render_list(frame, chunks[0], state, meals),
        RouteView::Detail { meal } => meals::render_detail(frame, chunks[0], state, meal),
    }

    render_tab_bar(frame, chunks[1], state);
    render_status_line(frame, chunks[2], state);

    if state.help_visible {
        render_help_overlay(frame, area);
    }
}

/// Style helper that drops colors when they are disabled
pub(crate) fn themed(state: &AppState, style: Style) -> Style {
    if state.config.colors_enabled {
        style
    } else {
        Style::default().add_modifier(style.add_modifier)
    }
}

fn render_tab_bar(frame: &mut Frame, area: Rect, state: &AppState) {
    let titles: Vec<Line> = Tab::ALL
        .iter()
        .enumerate()
        .map(|(i, tab)| Line::from(format!("{} {}", i + 1, tab.title())))
        .collect();

    let tabs = Tabs::new(titles)
        .block(Block::default().borders(Borders::ALL))
        .select(state.navigator.active_tab().index())
        .highlight_style(themed(
            state,
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        ))
        .divider("|");

    frame.render_widget(tabs, area);
}

fn render_status_line(frame: &mut Frame, area: Rect, state: &AppState) {
    let hints = match state.route() {
        libbistro::Route::Home => "Enter: Press | 1/2: Tabs | r: Refresh | F1: Help | q: Quit",
        libbistro::Route::List => "↑/↓: Move | Enter: Open | r: Refresh | F1: Help | q: Quit",
        libbistro::Route::Detail(_) => "Esc: Back | 1/2: Tabs | F1: Help | q: Quit",
    };

    let mut spans = Vec::new();
    if let Some(ref message) = state.status.message {
        spans.push(Span::styled(
            message.clone(),
            themed(state, Style::default().fg(Color::Cyan)),
        ));
        spans.push(Span::raw(" | "));
    }
    spans.push(Span::styled(hints, themed(state, Style::default().fg(Color::Gray))));

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn render_help_overlay(frame: &mut Frame, area: Rect) {
    let popup_area = centered_rect(60, 60, area);

    let help_text = vec![
        Line::from(Span::styled("Keyboard Shortcuts", Style::default().add_modifier(Modifier::BOLD))),
        Line::from(""),
        Line::from("Global:"),
        Line::from("  1 / 2     - Home / List tab"),
        Line::from("  ← / →     - Switch tab"),
        Line::from("  r         - Reload meals"),
        Line::from("  F1        - Toggle help"),
        Line::from("  q         - Quit"),
        Line::from(""),
        Line::from("Home:   Enter/Space - press the button"),
        Line::from("List:   ↑/↓ or k/j - move, Enter - open"),
        Line::from("Detail: Esc/Backspace - back to list"),
        Line::from(""),
        Line::from("Press Esc or F1 to close"),
    ];

    let help = Paragraph::new(help_text)
        .block(
            Block::default()
                .title(" Help ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        )
        .wrap(Wrap { trim: false })
        .alignment(Alignment::Left);

    frame.render_widget(Clear, popup_area);
    frame.render_widget(help, popup_area);
}

/// Helper to create centered rectangle
fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
