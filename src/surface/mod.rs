//! Drawing surfaces
//!
//! A surface is whatever the dashboard draws into. The controller only
//! speaks in terms of targets and finished chart geometry, so the terminal
//! renderer and the SVG export share one code path.

pub mod scene;
pub mod svg;

pub use scene::{Scene, SceneSurface};
pub use svg::SvgSurface;

use crate::chart::{BarChart, BubbleChart};

#[cfg(test)]
use mockall::automock;

/// Page elements the dashboard draws into, displayed by their element ids.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, strum::Display, strum::EnumIter,
)]
pub enum Target {
    #[strum(serialize = "#selDataset")]
    Selector,
    #[strum(serialize = "#bar")]
    Bar,
    #[strum(serialize = "#bubble")]
    Bubble,
    #[strum(serialize = "#sample-metadata")]
    Metadata,
}

impl Target {
    /// Element id without the leading `#`.
    pub fn element_id(&self) -> &'static str {
        match self {
            Target::Selector => "selDataset",
            Target::Bar => "bar",
            Target::Bubble => "bubble",
            Target::Metadata => "sample-metadata",
        }
    }
}

/// One selector entry: `value` is the sample index, `text` its id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectorOption {
    pub value: usize,
    pub text: String,
}

#[cfg_attr(test, automock)]
pub trait Surface {
    /// Append entries to the selector.
    fn set_options(&mut self, options: &[SelectorOption]);

    /// Mark the selector entry with this value as chosen.
    fn select(&mut self, index: usize);

    /// Remove everything previously drawn into `target`.
    fn clear(&mut self, target: Target);

    fn draw_bar_chart(&mut self, chart: &BarChart);

    fn draw_bubble_chart(&mut self, chart: &BubbleChart);

    fn draw_metadata(&mut self, lines: &[String]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_target_ids() {
        let shown: Vec<String> = Target::iter().map(|t| t.to_string()).collect();
        assert_eq!(
            shown,
            vec!["#selDataset", "#bar", "#bubble", "#sample-metadata"]
        );
        for target in Target::iter() {
            assert_eq!(format!("#{}", target.element_id()), target.to_string());
        }
    }
}
