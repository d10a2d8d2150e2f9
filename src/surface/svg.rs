//! SVG/HTML surface
//!
//! Keeps one markup fragment per target. Drawing appends to the fragment and
//! clearing empties it, mirroring how elements accumulate in a page until
//! they are removed.

use super::{SelectorOption, Surface, Target};
use crate::chart::{Axis, AxisSide, BarChart, BubbleChart};
use std::collections::BTreeMap;
use std::fmt::Write;
use std::fs;
use std::path::{Path, PathBuf};
use strum::IntoEnumIterator;

const SVG_NS: &str = "http://www.w3.org/2000/svg";

/// Files written by [`SvgSurface::write_to`].
pub const PAGE_FILE: &str = "index.html";
pub const BAR_FILE: &str = "bar.svg";
pub const BUBBLE_FILE: &str = "bubble.svg";
pub const METADATA_FILE: &str = "metadata.txt";

#[derive(Debug, Clone, Default)]
pub struct SvgSurface {
    fragments: BTreeMap<Target, String>,
    options: Vec<SelectorOption>,
    selected: Option<usize>,
    metadata: Vec<String>,
}

impl SvgSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Markup currently drawn into `target`; empty when nothing is drawn.
    pub fn fragment(&self, target: Target) -> &str {
        self.fragments.get(&target).map(String::as_str).unwrap_or("")
    }

    /// Standalone page with every target in its element.
    pub fn page(&self) -> String {
        let mut html = String::new();
        let _ = writeln!(html, "<!DOCTYPE html>");
        let _ = writeln!(html, "<html>");
        let _ = writeln!(html, "<head>");
        let _ = writeln!(html, "  <meta charset=\"utf-8\">");
        let _ = writeln!(html, "  <title>OTU Dashboard</title>");
        let _ = writeln!(html, "</head>");
        let _ = writeln!(html, "<body>");
        for target in Target::iter() {
            match target {
                Target::Selector => {
                    let _ = writeln!(
                        html,
                        "<select id=\"{}\">\n{}</select>",
                        target.element_id(),
                        self.fragment(target)
                    );
                }
                _ => {
                    let _ = writeln!(
                        html,
                        "<div id=\"{}\">\n{}</div>",
                        target.element_id(),
                        self.fragment(target)
                    );
                }
            }
        }
        let _ = writeln!(html, "</body>");
        let _ = writeln!(html, "</html>");
        html
    }

    /// Write the page, both charts and the metadata lines into `dir`.
    ///
    /// Returns the paths written, page first.
    pub fn write_to(&self, dir: &Path) -> Result<Vec<PathBuf>, std::io::Error> {
        fs::create_dir_all(dir)?;
        let files = [
            (PAGE_FILE, self.page()),
            (BAR_FILE, self.fragment(Target::Bar).to_string()),
            (BUBBLE_FILE, self.fragment(Target::Bubble).to_string()),
            (METADATA_FILE, self.metadata_text()),
        ];
        let mut written = Vec::with_capacity(files.len());
        for (name, contents) in files {
            let path = dir.join(name);
            fs::write(&path, contents)?;
            written.push(path);
        }
        Ok(written)
    }

    fn metadata_text(&self) -> String {
        let mut text = self.metadata.join("\n");
        if !text.is_empty() {
            text.push('\n');
        }
        text
    }

    fn render_options(&mut self) {
        let mut markup = String::new();
        for option in &self.options {
            let selected = if self.selected == Some(option.value) {
                " selected"
            } else {
                ""
            };
            let _ = writeln!(
                markup,
                "  <option value=\"{}\"{}>{}</option>",
                option.value,
                selected,
                escape_text(&option.text)
            );
        }
        self.fragments.insert(Target::Selector, markup);
    }

    fn append(&mut self, target: Target, markup: &str) {
        self.fragments.entry(target).or_default().push_str(markup);
    }
}

impl Surface for SvgSurface {
    fn set_options(&mut self, options: &[SelectorOption]) {
        self.options.extend_from_slice(options);
        self.render_options();
    }

    fn select(&mut self, index: usize) {
        self.selected = Some(index);
        self.render_options();
    }

    fn clear(&mut self, target: Target) {
        self.fragments.remove(&target);
        match target {
            Target::Selector => {
                self.options.clear();
                self.selected = None;
            }
            Target::Metadata => self.metadata.clear(),
            Target::Bar | Target::Bubble => {}
        }
    }

    fn draw_bar_chart(&mut self, chart: &BarChart) {
        let markup = bar_chart_svg(chart);
        self.append(Target::Bar, &markup);
    }

    fn draw_bubble_chart(&mut self, chart: &BubbleChart) {
        let markup = bubble_chart_svg(chart);
        self.append(Target::Bubble, &markup);
    }

    fn draw_metadata(&mut self, lines: &[String]) {
        let mut markup = String::new();
        for line in lines {
            let _ = writeln!(markup, "  <p>{}</p>", escape_text(line));
        }
        self.metadata.extend_from_slice(lines);
        self.append(Target::Metadata, &markup);
    }
}

pub fn bar_chart_svg(chart: &BarChart) -> String {
    let v = &chart.viewport;
    let mut svg = String::new();
    let _ = writeln!(
        svg,
        "<svg xmlns=\"{}\" width=\"{}\" height=\"{}\">",
        SVG_NS,
        px(v.width),
        px(v.height)
    );
    let _ = writeln!(
        svg,
        "  <g transform=\"translate({},{})\">",
        px(v.margin.left),
        px(v.margin.top)
    );
    for bar in &chart.bars {
        let _ = writeln!(
            svg,
            "    <rect class=\"bar\" x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\" fill=\"{}\"><title>{}</title></rect>",
            px(bar.x),
            px(bar.y),
            px(bar.width),
            px(bar.height),
            chart.fill,
            escape_text(&bar.tooltip)
        );
    }
    write_axis(&mut svg, "x-axis", &chart.x_axis, v.inner_height);
    write_axis(&mut svg, "y-axis", &chart.y_axis, 0.0);
    let _ = writeln!(svg, "  </g>");
    let _ = writeln!(svg, "</svg>");
    svg
}

pub fn bubble_chart_svg(chart: &BubbleChart) -> String {
    let v = &chart.viewport;
    let mut svg = String::new();
    let _ = writeln!(
        svg,
        "<svg xmlns=\"{}\" width=\"{}\" height=\"{}\">",
        SVG_NS,
        px(v.width),
        px(v.height)
    );
    let _ = writeln!(
        svg,
        "  <g transform=\"translate({},{})\">",
        px(v.margin.left),
        px(v.margin.top)
    );
    for circle in &chart.circles {
        let _ = writeln!(
            svg,
            "    <circle cx=\"{}\" cy=\"{}\" r=\"{}\" style=\"fill: {};\" opacity=\"{}\"><title>{}</title></circle>",
            px(circle.cx),
            px(circle.cy),
            px(circle.r),
            circle.color,
            chart.opacity,
            escape_text(&circle.tooltip)
        );
    }
    write_axis(&mut svg, "x-axis", &chart.x_axis, v.inner_height);
    write_axis(&mut svg, "y-axis", &chart.y_axis, 0.0);
    let _ = writeln!(
        svg,
        "    <text class=\"x-label\" x=\"{}\" y=\"{}\" style=\"text-anchor: middle;\">{}</text>",
        px(chart.x_label.x),
        px(chart.x_label.y),
        escape_text(&chart.x_label.text)
    );
    let _ = writeln!(svg, "  </g>");
    let _ = writeln!(svg, "</svg>");
    svg
}

/// Axis group: domain path plus one tick mark and label per tick.
/// Bottom axes are shifted down by `offset`.
fn write_axis(svg: &mut String, class: &str, axis: &Axis, offset: f64) {
    match axis.side {
        AxisSide::Bottom => {
            let _ = writeln!(
                svg,
                "    <g class=\"{}\" transform=\"translate(0,{})\" text-anchor=\"middle\">",
                class,
                px(offset)
            );
            let _ = writeln!(
                svg,
                "      <path class=\"domain\" stroke=\"currentColor\" d=\"M0,6V0H{}V6\"/>",
                px(axis.length)
            );
            for tick in &axis.ticks {
                let _ = writeln!(
                    svg,
                    "      <g class=\"tick\" transform=\"translate({},0)\"><line stroke=\"currentColor\" y2=\"6\"/><text fill=\"currentColor\" y=\"9\" dy=\"0.71em\">{}</text></g>",
                    px(tick.offset),
                    escape_text(&tick.label)
                );
            }
        }
        AxisSide::Left => {
            let _ = writeln!(svg, "    <g class=\"{}\" text-anchor=\"end\">", class);
            let _ = writeln!(
                svg,
                "      <path class=\"domain\" stroke=\"currentColor\" d=\"M-6,0H0V{}H-6\"/>",
                px(axis.length)
            );
            for tick in &axis.ticks {
                let _ = writeln!(
                    svg,
                    "      <g class=\"tick\" transform=\"translate(0,{})\"><line stroke=\"currentColor\" x2=\"-6\"/><text fill=\"currentColor\" x=\"-9\" dy=\"0.32em\">{}</text></g>",
                    px(tick.offset),
                    escape_text(&tick.label)
                );
            }
        }
    }
    let _ = writeln!(svg, "    </g>");
}

/// Pixel value with at most two decimals and no trailing zeros.
fn px(value: f64) -> String {
    let fixed = format!("{:.2}", value);
    let trimmed = fixed.trim_end_matches('0').trim_end_matches('.');
    match trimmed {
        "-0" | "" => "0".to_string(),
        other => other.to_string(),
    }
}

fn escape_text(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::{bar_chart, bubble_chart};
    use crate::dataset::fixtures::{sample, sample_with_taxa};
    use tempfile::tempdir;

    #[test]
    fn test_px_trims() {
        assert_eq!(px(420.0), "420");
        assert_eq!(px(3.3663366), "3.37");
        assert_eq!(px(0.5), "0.5");
        assert_eq!(px(-0.001), "0");
    }

    #[test]
    fn test_escape_text() {
        assert_eq!(escape_text("a<b & \"c\""), "a&lt;b &amp; &quot;c&quot;");
    }

    #[test]
    // Each bar carries its label as a tooltip, escaped.
    fn test_bar_svg_rects_and_tooltips() {
        let chart = bar_chart(&sample("940", &[1, 2], &[4.0, 8.0], &["A;B", "C<D"]));
        let svg = bar_chart_svg(&chart);
        assert_eq!(svg.matches("<rect").count(), 2);
        assert!(svg.contains("<title>A;B</title>"));
        assert!(svg.contains("<title>C&lt;D</title>"));
        assert!(svg.contains("width=\"420\""));
        assert!(svg.contains(">OTU 1</text>"));
        assert!(svg.contains("translate(60,20)"));
    }

    #[test]
    fn test_bubble_svg_circles() {
        let chart = bubble_chart(&sample_with_taxa("940", 15));
        let svg = bubble_chart_svg(&chart);
        assert_eq!(svg.matches("<circle").count(), 15);
        assert!(svg.contains("OTU IDs"));
        assert!(svg.contains("opacity=\"0.7\""));
        assert!(svg.starts_with("<svg"));
    }

    #[test]
    // Drawing twice without clearing accumulates; clearing removes.
    fn test_draw_appends_until_cleared() {
        let chart = bar_chart(&sample_with_taxa("940", 3));
        let mut surface = SvgSurface::new();
        surface.draw_bar_chart(&chart);
        surface.draw_bar_chart(&chart);
        assert_eq!(surface.fragment(Target::Bar).matches("<svg").count(), 2);

        surface.clear(Target::Bar);
        assert_eq!(surface.fragment(Target::Bar), "");
    }

    #[test]
    fn test_selector_markup() {
        let mut surface = SvgSurface::new();
        surface.set_options(&[
            SelectorOption {
                value: 0,
                text: "940".to_string(),
            },
            SelectorOption {
                value: 1,
                text: "941".to_string(),
            },
        ]);
        surface.select(1);
        let markup = surface.fragment(Target::Selector);
        assert!(markup.contains("<option value=\"0\">940</option>"));
        assert!(markup.contains("<option value=\"1\" selected>941</option>"));

        surface.clear(Target::Selector);
        assert_eq!(surface.fragment(Target::Selector), "");
        surface.set_options(&[SelectorOption {
            value: 0,
            text: "943".to_string(),
        }]);
        let markup = surface.fragment(Target::Selector);
        assert!(!markup.contains("941"));
        assert!(!markup.contains("selected"));
    }

    #[test]
    fn test_write_to_creates_files() {
        let dir = tempdir().unwrap();
        let out = dir.path().join("out");

        let mut surface = SvgSurface::new();
        surface.draw_bar_chart(&bar_chart(&sample_with_taxa("940", 3)));
        surface.draw_metadata(&["id: 940".to_string(), "gender: F".to_string()]);

        let written = surface.write_to(&out).unwrap();
        assert_eq!(written.len(), 4);
        assert!(written[0].ends_with(PAGE_FILE));

        let page = fs::read_to_string(out.join(PAGE_FILE)).unwrap();
        assert!(page.contains("<div id=\"bar\">"));
        assert!(page.contains("<p>id: 940</p>"));
        let metadata = fs::read_to_string(out.join(METADATA_FILE)).unwrap();
        assert_eq!(metadata, "id: 940\ngender: F\n");
    }
}
