//! Dashboard component modules
//!
//! Contains all individual rendering components

pub mod bar_chart;
pub mod bubble_chart;
pub mod footer;
pub mod header;
pub mod metadata_panel;
pub mod selector;
