//! Error handling for the data provider module

use crate::dataset::DatasetError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProviderError {
    /// Reqwest error, typically related to network issues or request failures.
    #[error("Reqwest error: {0}")]
    Reqwest(#[from] reqwest::Error),

    /// The server answered with a non-success status.
    #[error("HTTP error with status {status}: {message}")]
    Http { status: u16, message: String },

    /// A local dataset file could not be read.
    #[error("Failed to read dataset file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The payload is not a dataset document.
    #[error("Malformed dataset: {0}")]
    Decode(#[from] serde_json::Error),

    /// The payload decoded but breaks a dataset invariant.
    #[error("Invalid dataset: {0}")]
    Invalid(#[from] DatasetError),
}

impl ProviderError {
    pub async fn from_response(response: reqwest::Response) -> ProviderError {
        let status = response.status().as_u16();
        let message = response
            .text()
            .await
            .unwrap_or_else(|_| "Failed to read response text".to_string());

        ProviderError::Http { status, message }
    }
}
