//! Terminal dashboard
//!
//! Split into state, the top-level renderer and one module per panel.

pub mod components;
pub mod renderer;
pub mod state;
pub mod utils;

// Re-export main types and functions for external use
pub use renderer::render_dashboard;
pub use state::DashboardState;
