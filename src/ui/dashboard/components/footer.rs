//! Dashboard footer component
//!
//! Renders key help and the focused taxon's label

use super::super::state::DashboardState;
use ratatui::Frame;
use ratatui::layout::Alignment;
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

/// Render footer.
pub fn render_footer(f: &mut Frame, area: ratatui::layout::Rect, state: &DashboardState) {
    let keys = "[↑/↓] Sample | [←/→] Taxon | [Home/End] First/Last | [Q] Quit";

    let mut lines = vec![Line::from(Span::styled(
        keys,
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    ))];
    if let Some(tooltip) = state.focused_tooltip() {
        lines.push(Line::from(Span::styled(
            tooltip.to_string(),
            Style::default().fg(Color::LightYellow),
        )));
    }

    let footer = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::TOP)
            .border_type(BorderType::Thick),
    );
    f.render_widget(footer, area);
}
