use libbistro::Meal;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};

use super::themed;
use crate::app::AppState;

/// One row per meal, cursor highlighted
pub(super) fn render_list(frame: &mut Frame, area: Rect, state: &AppState, meals: &[Meal]) {
    let block = Block::default().title(" Meals ").borders(Borders::ALL);

    if meals.is_empty() {
        let text = if state.fetch.loading || state.fetch.requested {
            "Loading..."
        } else {
            "No meals"
        };
        let empty = Paragraph::new(text)
            .block(block)
            .style(themed(state, Style::default().fg(Color::Gray)));
        frame.render_widget(empty, area);
        return;
    }

    let items: Vec<ListItem> = meals
        .iter()
        .map(|meal| {
            let mut spans = vec![Span::raw(meal.name.clone())];
            if !meal.category.is_empty() {
                spans.push(Span::styled(
                    format!("  {}", meal.category),
                    themed(state, Style::default().fg(Color::DarkGray)),
                ));
            }
            ListItem::new(Line::from(spans))
        })
        .collect();

    let list = List::new(items)
        .block(block)
        .highlight_style(themed(
            state,
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        ))
        .highlight_symbol("> ");

    let mut list_state = ListState::default().with_selected(Some(state.list.cursor));
    frame.render_stateful_widget(list, area, &mut list_state);
}

/// Full record of one meal; nothing at all when the id did not resolve
pub(super) fn render_detail(frame: &mut Frame, area: Rect, state: &AppState, meal: Option<&Meal>) {
    let Some(meal) = meal else {
        return;
    };

    let heading = themed(state, Style::default().add_modifier(Modifier::BOLD));

    let mut lines = vec![
        Line::from(Span::styled(
            meal.name.clone(),
            themed(state, Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)),
        )),
        Line::from(""),
    ];
    if !meal.thumbnail.is_empty() {
        lines.push(Line::from(Span::styled(
            meal.thumbnail.clone(),
            themed(state, Style::default().fg(Color::Blue).add_modifier(Modifier::UNDERLINED)),
        )));
        lines.push(Line::from(""));
    }
    lines.push(Line::from(vec![
        Span::styled("Category: ", heading),
        Span::raw(meal.category.clone()),
    ]));
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled("Instructions:", heading)));
    lines.extend(meal.instructions.lines().map(|line| Line::from(line.to_string())));

    let detail = Paragraph::new(lines)
        .block(Block::default().title(format!(" {} ", meal.id)).borders(Borders::ALL))
        .wrap(Wrap { trim: false });

    frame.render_widget(detail, area);
}
