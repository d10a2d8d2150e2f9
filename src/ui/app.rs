//! Main application state and UI loop
//!
//! Contains the App struct and main UI event handling logic

use crate::ui::dashboard::{DashboardState, render_dashboard};
use crossterm::event::{self, Event, KeyCode};
use ratatui::{Terminal, backend::Backend};
use std::time::Duration;

/// Rows skipped by PageUp/PageDown in the selector.
const PAGE_STEP: isize = 10;

/// UI configuration data grouped by concern
#[derive(Debug, Clone)]
pub struct UIConfig {
    pub with_background_color: bool,
    pub source: String,
    pub loaded_at: String,
}

impl UIConfig {
    pub fn new(with_background_color: bool, source: String, loaded_at: String) -> Self {
        Self {
            with_background_color,
            source,
            loaded_at,
        }
    }
}

/// What a key press asks the loop to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyOutcome {
    Continue,
    Quit,
}

/// Application state
#[derive(Debug)]
pub struct App {
    state: DashboardState,
}

impl App {
    pub fn new(state: DashboardState) -> Self {
        Self { state }
    }

    pub fn state(&self) -> &DashboardState {
        &self.state
    }

    /// Apply one key press to the dashboard.
    pub fn handle_key(&mut self, code: KeyCode) -> KeyOutcome {
        match code {
            KeyCode::Esc | KeyCode::Char('q') => return KeyOutcome::Quit,
            KeyCode::Up | KeyCode::Char('k') => self.state.step_sample(-1),
            KeyCode::Down | KeyCode::Char('j') => self.state.step_sample(1),
            KeyCode::PageUp => self.state.step_sample(-PAGE_STEP),
            KeyCode::PageDown => self.state.step_sample(PAGE_STEP),
            KeyCode::Home | KeyCode::Char('g') => self.state.first_sample(),
            KeyCode::End | KeyCode::Char('G') => self.state.last_sample(),
            KeyCode::Left | KeyCode::Char('h') => self.state.step_bar(-1),
            KeyCode::Right | KeyCode::Char('l') => self.state.step_bar(1),
            _ => {}
        }
        KeyOutcome::Continue
    }
}

/// Runs the application UI in a loop, handling events and rendering the dashboard.
pub async fn run<B: Backend>(terminal: &mut Terminal<B>, mut app: App) -> std::io::Result<()> {
    // UI event loop
    loop {
        terminal.draw(|f| render_dashboard(f, app.state()))?;

        // Poll for key events
        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                // Skip events that are not KeyEventKind::Press
                if key.kind == event::KeyEventKind::Release {
                    continue;
                }

                if app.handle_key(key.code) == KeyOutcome::Quit {
                    return Ok(());
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dashboard::Dashboard;
    use crate::dataset::fixtures::{dataset, sample, sample_with_taxa};
    use crate::surface::SceneSurface;
    use ratatui::backend::TestBackend;

    fn app() -> App {
        let dataset = dataset(vec![
            sample("940", &[1167, 2859], &[163.0, 126.0], &["Bacteroides", "Firmicutes"]),
            sample_with_taxa("941", 12),
            sample_with_taxa("943", 4),
        ]);
        let dashboard = Dashboard::initialize(dataset, SceneSurface::new());
        let config = UIConfig::new(
            false,
            "samples.json".to_string(),
            "2026-10-19 12:00:00".to_string(),
        );
        App::new(DashboardState::new(dashboard, config))
    }

    fn screen_text(terminal: &Terminal<TestBackend>) -> String {
        let buffer = terminal.backend().buffer();
        let area = buffer.area;
        let mut text = String::new();
        for y in 0..area.height {
            for x in 0..area.width {
                text.push_str(buffer[(x, y)].symbol());
            }
            text.push('\n');
        }
        text
    }

    #[test]
    fn test_keys_move_selection() {
        let mut app = app();
        assert_eq!(app.state().selected(), Some(0));
        assert_eq!(app.handle_key(KeyCode::Down), KeyOutcome::Continue);
        assert_eq!(app.state().selected_id(), Some("941"));
        app.handle_key(KeyCode::End);
        assert_eq!(app.state().selected(), Some(2));
        app.handle_key(KeyCode::Char('k'));
        assert_eq!(app.state().selected(), Some(1));
        app.handle_key(KeyCode::Home);
        assert_eq!(app.state().selected(), Some(0));
        assert_eq!(app.handle_key(KeyCode::Char('q')), KeyOutcome::Quit);
        assert_eq!(app.handle_key(KeyCode::Esc), KeyOutcome::Quit);
    }

    #[test]
    // Focus moves across the bars and resets when the sample changes.
    fn test_keys_move_bar_focus() {
        let mut app = app();
        assert_eq!(app.state().focused_tooltip(), Some("Bacteroides"));
        app.handle_key(KeyCode::Right);
        app.handle_key(KeyCode::Right);
        assert_eq!(app.state().focused_bar(), 1);
        assert_eq!(app.state().focused_tooltip(), Some("Firmicutes"));

        app.handle_key(KeyCode::Down);
        assert_eq!(app.state().focused_bar(), 0);
    }

    #[test]
    fn test_render_shows_selector_metadata_and_charts() {
        let app = app();
        let mut terminal = Terminal::new(TestBackend::new(140, 48)).unwrap();
        terminal.draw(|f| render_dashboard(f, app.state())).unwrap();

        let text = screen_text(&terminal);
        assert!(text.contains("940"));
        assert!(text.contains("943"));
        assert!(text.contains("id: 940"));
        assert!(text.contains("wfreq: 2"));
        assert!(text.contains("OTU 1167"));
        assert!(text.contains("Bacteroides"));
    }
}
