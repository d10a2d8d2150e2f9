//! Dashboard bar chart component
//!
//! Draws the bar geometry on a braille canvas. Canvas y grows upwards, so
//! chart rows are flipped against the inner height.

use super::super::state::DashboardState;
use super::super::utils::{axis_gutter, css_color};
use ratatui::Frame;
use ratatui::prelude::{Color, Style};
use ratatui::symbols::Marker;
use ratatui::text::Span;
use ratatui::widgets::canvas::{Canvas, Line as CanvasLine};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

/// Braille cells hold four dot rows.
const DOTS_PER_ROW: f64 = 4.0;

pub fn render_bar_chart(f: &mut Frame, area: ratatui::layout::Rect, state: &DashboardState) {
    let block = Block::default()
        .title("TOP 10 OTUs")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Cyan));

    let Some(chart) = state.scene().bar.as_ref() else {
        f.render_widget(Paragraph::new("No sample selected").block(block), area);
        return;
    };

    let inner = block.inner(area);
    let width = chart.viewport.inner_width;
    let height = chart.viewport.inner_height;
    let label_cols = chart
        .y_axis
        .ticks
        .iter()
        .map(|tick| tick.label.chars().count())
        .max()
        .unwrap_or(0) as f64
        + 1.0;
    let left = axis_gutter(width, inner.width, label_cols);
    let bottom = axis_gutter(height, inner.height, 1.0);
    let dot_step = height / (f64::from(inner.height.max(1)) * DOTS_PER_ROW);

    let fill = css_color(chart.fill);
    let focused = state.focused_bar();

    let canvas = Canvas::default()
        .block(block)
        .marker(Marker::Braille)
        .x_bounds([-left, width])
        .y_bounds([-bottom, height])
        .paint(move |ctx| {
            for (i, bar) in chart.bars.iter().enumerate() {
                let color = if i == focused { Color::LightYellow } else { fill };
                let base = height - bar.y - bar.height;
                // Stack horizontal strokes to fill the bar.
                let strokes = (bar.height / dot_step).ceil().max(1.0) as usize;
                for k in 0..=strokes {
                    let y = (base + k as f64 * dot_step).min(base + bar.height);
                    ctx.draw(&CanvasLine::new(bar.x, y, bar.x + bar.width, y, color));
                }
            }
            ctx.layer();

            for tick in &chart.y_axis.ticks {
                ctx.print(
                    -left,
                    height - tick.offset,
                    Span::styled(tick.label.clone(), Style::default().fg(Color::Gray)),
                );
            }
            for tick in &chart.x_axis.ticks {
                ctx.print(
                    tick.offset,
                    -bottom,
                    Span::styled(tick.label.clone(), Style::default().fg(Color::DarkGray)),
                );
            }
        });

    f.render_widget(canvas, area);
}
