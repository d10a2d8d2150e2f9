//! Dashboard utility functions
//!
//! Contains helper functions used across dashboard components

use ratatui::prelude::Color;

/// Get a ratatui color for a CSS color used by the chart geometry.
///
/// Understands `#rrggbb` and the named colors the charts use; anything else
/// falls back to white.
pub fn css_color(value: &str) -> Color {
    if let Some(hex) = value.strip_prefix('#') {
        if hex.len() == 6 {
            if let Ok(rgb) = u32::from_str_radix(hex, 16) {
                return Color::Rgb((rgb >> 16) as u8, (rgb >> 8) as u8, rgb as u8);
            }
        }
    }
    match value {
        "steelblue" => Color::Rgb(70, 130, 180),
        _ => Color::White,
    }
}

/// Room, in data units, to leave before the plot so that `reserve` cells
/// of labels fit next to `span` data units drawn across `cells` cells.
pub fn axis_gutter(span: f64, cells: u16, reserve: f64) -> f64 {
    let cells = f64::from(cells);
    if cells <= reserve {
        return 0.0;
    }
    span * reserve / (cells - reserve)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_css_color() {
        assert_eq!(css_color("#1f77b4"), Color::Rgb(0x1f, 0x77, 0xb4));
        assert_eq!(css_color("steelblue"), Color::Rgb(70, 130, 180));
        assert_eq!(css_color("#zzzzzz"), Color::White);
        assert_eq!(css_color("plum"), Color::White);
    }

    #[test]
    // The gutter takes the same share of data units as of cells.
    fn test_axis_gutter() {
        assert_eq!(axis_gutter(100.0, 110, 10.0), 10.0);
        assert_eq!(axis_gutter(100.0, 5, 10.0), 0.0);
    }
}
