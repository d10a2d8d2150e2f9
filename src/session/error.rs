//! Failures that end a command

use crate::dashboard::DashboardError;
use crate::provider::ProviderError;
use std::path::PathBuf;
use thiserror::Error;

/// Everything a command can fail with. The display text is the headline of
/// the `[ERROR]` report; the source, when present, becomes its details.
#[derive(Debug, Error)]
pub enum CommandError {
    #[error("Could not locate the config file")]
    ConfigPath(#[source] std::io::Error),

    #[error("Failed to read config {}", path.display())]
    ReadConfig {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to save config {}", path.display())]
    SaveConfig {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to load dataset")]
    Load(#[from] ProviderError),

    #[error("Failed to select sample")]
    Selection(#[from] DashboardError),

    #[error("Dataset contains no samples to export")]
    NothingToExport,

    #[error("Failed to write export to {}", dir.display())]
    Export {
        dir: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Terminal error")]
    Terminal(#[from] std::io::Error),
}
