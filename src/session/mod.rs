pub mod error;
pub mod export_mode;
pub mod list_mode;
pub mod setup;
pub mod tui_mode;

pub use error::CommandError;
pub use export_mode::run_export_mode;
pub use list_mode::run_list_mode;
pub use setup::{SessionData, setup_session, source_from_env};
pub use tui_mode::run_tui_mode;
