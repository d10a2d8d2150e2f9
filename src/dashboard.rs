//! Dashboard controller
//!
//! Owns the validated dataset and a drawing surface. Every selection clears
//! the charts and the metadata panel, then redraws them from scratch.

use crate::chart::{bar_chart, bubble_chart};
use crate::dataset::ValidDataset;
use crate::metadata::metadata_lines;
use crate::surface::{SelectorOption, Surface, Target};
use log::{debug, warn};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DashboardError {
    #[error("sample index {index} out of range for {len} samples")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("no sample with id {id}")]
    UnknownSample { id: String },
}

#[derive(Debug)]
pub struct Dashboard<S: Surface> {
    dataset: ValidDataset,
    surface: S,
    options: Vec<SelectorOption>,
    selected: Option<usize>,
}

impl<S: Surface> Dashboard<S> {
    /// Populate the selector and draw the first sample, if any.
    pub fn initialize(dataset: ValidDataset, mut surface: S) -> Self {
        let options: Vec<SelectorOption> = dataset
            .entries()
            .iter()
            .enumerate()
            .map(|(value, entry)| SelectorOption {
                value,
                text: entry.sample.id.clone(),
            })
            .collect();
        surface.clear(Target::Selector);
        surface.set_options(&options);

        let mut dashboard = Self {
            dataset,
            surface,
            options,
            selected: None,
        };
        if !dashboard.dataset.is_empty() {
            dashboard.redraw(0);
        }
        dashboard
    }

    /// Switch to the sample at `index` and redraw everything for it.
    pub fn select_sample(&mut self, index: usize) -> Result<(), DashboardError> {
        if index >= self.dataset.len() {
            return Err(DashboardError::IndexOutOfRange {
                index,
                len: self.dataset.len(),
            });
        }
        self.redraw(index);
        Ok(())
    }

    /// Switch to the sample with the given id.
    pub fn select_sample_by_id(&mut self, id: &str) -> Result<(), DashboardError> {
        let index = self
            .dataset
            .position(id)
            .ok_or_else(|| DashboardError::UnknownSample { id: id.to_string() })?;
        self.select_sample(index)
    }

    /// Move the selection by `delta`, stopping at either end.
    pub fn step_selection(&mut self, delta: isize) {
        let Some(current) = self.selected else {
            return;
        };
        let last = self.dataset.len().saturating_sub(1);
        let target = current.saturating_add_signed(delta).min(last);
        if target != current {
            self.redraw(target);
        }
    }

    pub fn select_first(&mut self) {
        if !self.dataset.is_empty() {
            self.redraw(0);
        }
    }

    pub fn select_last(&mut self) {
        if let Some(last) = self.dataset.len().checked_sub(1) {
            self.redraw(last);
        }
    }

    pub fn options(&self) -> &[SelectorOption] {
        &self.options
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    fn redraw(&mut self, index: usize) {
        let Some(entry) = self.dataset.entry(index) else {
            return;
        };
        debug!("Rendering sample {} (index {})", entry.sample.id, index);
        if entry.sample.is_empty() {
            warn!("Sample {} has no taxa, charts will be empty", entry.sample.id);
        }

        self.surface.select(index);
        self.surface.clear(Target::Bar);
        self.surface.clear(Target::Bubble);
        self.surface.clear(Target::Metadata);

        self.surface.draw_bar_chart(&bar_chart(&entry.sample));
        self.surface.draw_bubble_chart(&bubble_chart(&entry.sample));
        self.surface.draw_metadata(&metadata_lines(&entry.metadata));

        self.selected = Some(index);
    }
}
