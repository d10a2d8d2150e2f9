//! Dashboard state management
//!
//! Wraps the controller together with what only the terminal needs: the
//! focused bar (the terminal's stand-in for hovering a tooltip) and display
//! settings.

use crate::dashboard::Dashboard;
use crate::surface::{Scene, SceneSurface};
use crate::ui::app::UIConfig;

#[derive(Debug)]
pub struct DashboardState {
    /// Controller drawing into the in-memory scene.
    dashboard: Dashboard<SceneSurface>,
    /// Index of the highlighted bar within the bar chart.
    focused_bar: usize,
    /// Where the dataset was loaded from.
    pub source: String,
    /// When the dataset finished loading, local time.
    pub loaded_at: String,
    /// Whether to enable background colors
    pub with_background_color: bool,
}

impl DashboardState {
    pub fn new(dashboard: Dashboard<SceneSurface>, ui_config: UIConfig) -> Self {
        Self {
            dashboard,
            focused_bar: 0,
            source: ui_config.source,
            loaded_at: ui_config.loaded_at,
            with_background_color: ui_config.with_background_color,
        }
    }

    pub fn scene(&self) -> &Scene {
        self.dashboard.surface().scene()
    }

    pub fn sample_count(&self) -> usize {
        self.dashboard.options().len()
    }

    pub fn selected(&self) -> Option<usize> {
        self.dashboard.selected()
    }

    /// Selected sample id, if any sample is selected.
    pub fn selected_id(&self) -> Option<&str> {
        let index = self.selected()?;
        self.dashboard
            .options()
            .get(index)
            .map(|option| option.text.as_str())
    }

    pub fn focused_bar(&self) -> usize {
        self.focused_bar
    }

    /// Tooltip text of the focused bar.
    pub fn focused_tooltip(&self) -> Option<&str> {
        self.scene()
            .bar
            .as_ref()?
            .bars
            .get(self.focused_bar)
            .map(|bar| bar.tooltip.as_str())
    }

    pub fn step_sample(&mut self, delta: isize) {
        let before = self.dashboard.selected();
        self.dashboard.step_selection(delta);
        if self.dashboard.selected() != before {
            self.focused_bar = 0;
        }
    }

    pub fn first_sample(&mut self) {
        self.dashboard.select_first();
        self.focused_bar = 0;
    }

    pub fn last_sample(&mut self) {
        self.dashboard.select_last();
        self.focused_bar = 0;
    }

    pub fn step_bar(&mut self, delta: isize) {
        let count = self.scene().bar.as_ref().map_or(0, |chart| chart.bars.len());
        if count == 0 {
            return;
        }
        self.focused_bar = self
            .focused_bar
            .saturating_add_signed(delta)
            .min(count - 1);
    }
}
