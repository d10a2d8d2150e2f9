//! Dashboard main renderer

use super::components::{bar_chart, bubble_chart, footer, header, metadata_panel, selector};
use super::state::DashboardState;
use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::prelude::{Color, Style};
use ratatui::widgets::Block;

/// Height of the metadata panel: seven lines plus border and padding.
const METADATA_PANEL_HEIGHT: u16 = 11;

pub fn render_dashboard(f: &mut Frame, state: &DashboardState) {
    if state.with_background_color {
        f.render_widget(
            Block::default().style(Style::default().bg(Color::Rgb(16, 20, 24))),
            f.area(),
        );
    }

    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4),
            Constraint::Fill(1),
            Constraint::Length(3),
        ])
        .margin(1)
        .split(f.area());

    header::render_header(f, main_chunks[0], state);

    let content_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(25), Constraint::Percentage(75)])
        .split(main_chunks[1]);

    let side_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Fill(1),
            Constraint::Length(METADATA_PANEL_HEIGHT),
        ])
        .split(content_chunks[0]);

    let chart_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(content_chunks[1]);

    selector::render_selector(f, side_chunks[0], state);
    metadata_panel::render_metadata_panel(f, side_chunks[1], state);
    bar_chart::render_bar_chart(f, chart_chunks[0], state);
    bubble_chart::render_bubble_chart(f, chart_chunks[1], state);
    footer::render_footer(f, main_chunks[2], state);
}
