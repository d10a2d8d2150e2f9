//! Data provider
//!
//! Loads the dataset exactly once. There is no retry: a failed load is
//! logged and handed back to the caller, and the dashboard never starts.

use crate::dataset::{Dataset, ValidDataset};
use log::{error, info};
use std::fmt::{Display, Formatter};
use std::path::PathBuf;

pub mod error;
pub mod file;
pub mod http;

pub use error::ProviderError;
pub use file::FileDataProvider;
pub use http::HttpDataProvider;

#[cfg(test)]
use mockall::automock;

#[cfg_attr(test, automock)]
#[async_trait::async_trait]
pub trait DataProvider: Send + Sync {
    /// Where the dataset comes from, for logs and messages.
    fn describe(&self) -> String;

    /// Fetch and decode the dataset.
    async fn load(&self) -> Result<Dataset, ProviderError>;
}

/// Where to load the dataset from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataSource {
    Remote(String),
    File(PathBuf),
}

impl DataSource {
    /// `http://` and `https://` sources are downloaded; anything else is a
    /// file path.
    pub fn parse(source: &str) -> Self {
        let trimmed = source.trim();
        let lower = trimmed.to_ascii_lowercase();
        if lower.starts_with("http://") || lower.starts_with("https://") {
            DataSource::Remote(trimmed.to_string())
        } else {
            DataSource::File(PathBuf::from(trimmed))
        }
    }

    pub fn into_provider(self) -> Result<Box<dyn DataProvider>, ProviderError> {
        Ok(match self {
            DataSource::Remote(url) => Box::new(HttpDataProvider::new(url)?),
            DataSource::File(path) => Box::new(FileDataProvider::new(path)),
        })
    }
}

impl Display for DataSource {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            DataSource::Remote(url) => write!(f, "{}", url),
            DataSource::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Load and validate the dataset in one awaited step.
///
/// Failures are logged at error level before being returned.
pub async fn load_dataset(provider: &dyn DataProvider) -> Result<ValidDataset, ProviderError> {
    info!("Loading dataset from {}", provider.describe());
    let result = match provider.load().await {
        Ok(dataset) => dataset.validate().map_err(ProviderError::from),
        Err(e) => Err(e),
    };

    match result {
        Ok(dataset) => {
            info!("Loaded {} samples", dataset.len());
            Ok(dataset)
        }
        Err(e) => {
            error!("Error fetching data: {}", e);
            Err(e)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::DatasetError;
    use crate::dataset::fixtures::{metadata, sample};

    fn raw_dataset() -> Dataset {
        Dataset {
            names: vec!["940".to_string()],
            samples: vec![sample("940", &[1], &[2.0], &["a"])],
            metadata: vec![metadata(940)],
        }
    }

    #[test]
    fn test_parse_source() {
        assert_eq!(
            DataSource::parse("https://example.com/samples.json"),
            DataSource::Remote("https://example.com/samples.json".to_string())
        );
        assert_eq!(
            DataSource::parse("HTTP://example.com/a.json"),
            DataSource::Remote("HTTP://example.com/a.json".to_string())
        );
        assert_eq!(
            DataSource::parse(" data/samples.json "),
            DataSource::File(PathBuf::from("data/samples.json"))
        );
    }

    #[tokio::test]
    async fn test_load_dataset_validates() {
        let mut provider = MockDataProvider::new();
        provider
            .expect_describe()
            .returning(|| "mock".to_string());
        provider
            .expect_load()
            .times(1)
            .returning(|| Ok(raw_dataset()));

        let dataset = load_dataset(&provider).await.unwrap();
        assert_eq!(dataset.len(), 1);
    }

    #[tokio::test]
    async fn test_load_dataset_passes_provider_errors_through() {
        let mut provider = MockDataProvider::new();
        provider
            .expect_describe()
            .returning(|| "mock".to_string());
        provider.expect_load().times(1).returning(|| {
            Err(ProviderError::Http {
                status: 503,
                message: "unavailable".to_string(),
            })
        });

        assert!(matches!(
            load_dataset(&provider).await,
            Err(ProviderError::Http { status: 503, .. })
        ));
    }

    #[tokio::test]
    async fn test_load_dataset_rejects_invalid_shape() {
        let mut provider = MockDataProvider::new();
        provider
            .expect_describe()
            .returning(|| "mock".to_string());
        provider.expect_load().times(1).returning(|| {
            let mut dataset = raw_dataset();
            dataset.metadata[0].id = 941;
            Ok(dataset)
        });

        match load_dataset(&provider).await {
            Err(ProviderError::Invalid(DatasetError::MissingMetadata { id })) => {
                assert_eq!(id, "940")
            }
            other => panic!("expected invalid dataset, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_file_source_provider() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("samples.json");
        std::fs::write(&path, serde_json::to_vec(&raw_dataset()).unwrap()).unwrap();

        let provider = DataSource::parse(path.to_str().unwrap())
            .into_provider()
            .unwrap();
        let dataset = load_dataset(provider.as_ref()).await.unwrap();
        assert_eq!(dataset.entry(0).unwrap().metadata.id, 940);
    }
}
