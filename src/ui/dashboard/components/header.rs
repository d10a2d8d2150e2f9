//! Dashboard header component
//!
//! Renders the title and the dataset origin

use super::super::state::DashboardState;

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

/// Render header with title and dataset line.
pub fn render_header(f: &mut Frame, area: ratatui::layout::Rect, state: &DashboardState) {
    let header_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Length(2)])
        .split(area);

    let version = env!("CARGO_PKG_VERSION");
    let title = Paragraph::new(format!("BELLY BUTTON BIODIVERSITY v{}", version))
        .alignment(Alignment::Center)
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_type(BorderType::Thick),
        );
    f.render_widget(title, header_chunks[0]);

    let sample_text = match state.selected_id() {
        Some(id) => format!("Sample {}", id),
        None => "No samples".to_string(),
    };
    let info = Paragraph::new(Line::from(vec![
        Span::styled(sample_text, Style::default().fg(Color::LightYellow)),
        Span::styled(
            format!(" | {} samples", state.sample_count()),
            Style::default().fg(Color::Gray),
        ),
        Span::styled(
            format!(" | {}", state.source),
            Style::default().fg(Color::LightBlue),
        ),
        Span::styled(
            format!(" | loaded {}", state.loaded_at),
            Style::default().fg(Color::DarkGray),
        ),
    ]))
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Style::default().fg(Color::DarkGray)),
    );
    f.render_widget(info, header_chunks[1]);
}
