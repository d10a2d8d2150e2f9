//! TUI mode execution

use super::{CommandError, SessionData};
use crate::dashboard::Dashboard;
use crate::surface::SceneSurface;
use crate::ui::{self, UIConfig, dashboard::DashboardState};
use crate::{print_cmd_info, print_cmd_success};
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Runs the application in TUI mode
///
/// This function handles:
/// 1. Dashboard initialization from the loaded dataset
/// 2. Terminal setup and cleanup
/// 3. UI application execution
///
/// # Arguments
/// * `session` - Session data from setup
/// * `with_background` - Whether to enable background colors
pub async fn run_tui_mode(
    session: SessionData,
    with_background: bool,
) -> Result<(), CommandError> {
    let source = session.source.to_string();
    print_cmd_info!("Starting dashboard", "{}", source);

    let dashboard = Dashboard::initialize(session.dataset, SceneSurface::new());
    let ui_config = UIConfig::new(with_background, source, session.loaded_at);
    let app = ui::App::new(DashboardState::new(dashboard, ui_config));

    // Terminal setup
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;

    // Initialize the terminal with Crossterm backend
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = ui::run(&mut terminal, app).await;

    // Clean up the terminal after running the application
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    // Handle the result
    result?;

    print_cmd_success!("Dashboard closed");
    Ok(())
}
