//! Sample selector component

use super::super::state::DashboardState;
use ratatui::Frame;
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders, List, ListItem, ListState};

/// Render the list of sample ids with the selected one highlighted.
pub fn render_selector(f: &mut Frame, area: ratatui::layout::Rect, state: &DashboardState) {
    let items: Vec<ListItem> = state
        .scene()
        .options
        .iter()
        .map(|option| ListItem::new(option.text.clone()))
        .collect();

    let block = Block::default()
        .title("TEST SUBJECT ID")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Cyan));

    let list = List::new(items)
        .block(block)
        .highlight_style(
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("> ");

    let mut list_state = ListState::default().with_selected(state.scene().selected);
    f.render_stateful_widget(list, area, &mut list_state);
}
