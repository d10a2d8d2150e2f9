//! Dashboard metadata panel component

use super::super::state::DashboardState;
use ratatui::Frame;
use ratatui::prelude::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Padding, Paragraph, Wrap};

/// Render the `field: value` lines of the selected sample.
pub fn render_metadata_panel(f: &mut Frame, area: ratatui::layout::Rect, state: &DashboardState) {
    let lines: Vec<Line> = state
        .scene()
        .metadata
        .iter()
        .map(|line| match line.split_once(": ") {
            Some((field, value)) => Line::from(vec![
                Span::styled(format!("{}: ", field), Style::default().fg(Color::Gray)),
                Span::styled(value.to_string(), Style::default().fg(Color::White)),
            ]),
            None => Line::from(line.clone()),
        })
        .collect();

    let block = Block::default()
        .title("DEMOGRAPHIC INFO")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Cyan))
        .padding(Padding::horizontal(1));

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: true });
    f.render_widget(paragraph, area);
}
