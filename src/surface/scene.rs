//! In-memory surface holding the latest geometry

use super::{SelectorOption, Surface, Target};
use crate::chart::{BarChart, BubbleChart};

/// Everything currently drawn, one slot per target.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Scene {
    pub options: Vec<SelectorOption>,
    pub selected: Option<usize>,
    pub bar: Option<BarChart>,
    pub bubble: Option<BubbleChart>,
    pub metadata: Vec<String>,
}

/// Surface backing the terminal dashboard.
#[derive(Debug, Clone, Default)]
pub struct SceneSurface {
    scene: Scene,
}

impl SceneSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }
}

impl Surface for SceneSurface {
    fn set_options(&mut self, options: &[SelectorOption]) {
        self.scene.options.extend_from_slice(options);
    }

    fn select(&mut self, index: usize) {
        self.scene.selected = Some(index);
    }

    fn clear(&mut self, target: Target) {
        match target {
            Target::Selector => {
                self.scene.options.clear();
                self.scene.selected = None;
            }
            Target::Bar => self.scene.bar = None,
            Target::Bubble => self.scene.bubble = None,
            Target::Metadata => self.scene.metadata.clear(),
        }
    }

    fn draw_bar_chart(&mut self, chart: &BarChart) {
        self.scene.bar = Some(chart.clone());
    }

    fn draw_bubble_chart(&mut self, chart: &BubbleChart) {
        self.scene.bubble = Some(chart.clone());
    }

    fn draw_metadata(&mut self, lines: &[String]) {
        self.scene.metadata.extend_from_slice(lines);
    }
}
