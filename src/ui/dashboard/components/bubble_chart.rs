//! Dashboard bubble chart component

use super::super::state::DashboardState;
use super::super::utils::{axis_gutter, css_color};
use ratatui::Frame;
use ratatui::prelude::{Color, Style};
use ratatui::symbols::Marker;
use ratatui::text::{Line, Span};
use ratatui::widgets::canvas::{Canvas, Circle};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

pub fn render_bubble_chart(f: &mut Frame, area: ratatui::layout::Rect, state: &DashboardState) {
    let mut block = Block::default()
        .title("ALL OTUs")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Cyan));

    let Some(chart) = state.scene().bubble.as_ref() else {
        f.render_widget(Paragraph::new("No sample selected").block(block), area);
        return;
    };
    block = block.title_bottom(Line::from(chart.x_label.text.clone()).centered());

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

    let canvas = Canvas::default()
        .block(block)
        .marker(Marker::Braille)
        .x_bounds([-left, width])
        .y_bounds([-bottom, height])
        .paint(move |ctx| {
            for circle in &chart.circles {
                ctx.draw(&Circle {
                    x: circle.cx,
                    y: height - circle.cy,
                    radius: circle.r,
                    color: css_color(circle.color),
                });
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
