//! Dataset read from a local file

use super::DataProvider;
use super::error::ProviderError;
use crate::dataset::Dataset;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct FileDataProvider {
    path: PathBuf,
}

impl FileDataProvider {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait::async_trait]
impl DataProvider for FileDataProvider {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    async fn load(&self) -> Result<Dataset, ProviderError> {
        let bytes = tokio::fs::read(&self.path)
            .await
            .map_err(|source| ProviderError::Io {
                path: self.path.clone(),
                source,
            })?;
        Ok(Dataset::from_slice(&bytes)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[tokio::test]
    async fn test_load_reads_json_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("samples.json");
        std::fs::write(
            &path,
            r#"{"samples":[{"id":"940","otu_ids":[],"sample_values":[],"otu_labels":[]}],"metadata":[]}"#,
        )
        .unwrap();

        let dataset = FileDataProvider::new(&path).load().await.unwrap();
        assert_eq!(dataset.samples[0].id, "940");
        assert!(dataset.names.is_empty());
    }

    #[tokio::test]
    async fn test_load_missing_file() {
        let dir = tempdir().unwrap();
        let provider = FileDataProvider::new(dir.path().join("nope.json"));
        match provider.load().await {
            Err(ProviderError::Io { path, .. }) => assert!(path.ends_with("nope.json")),
            other => panic!("expected IO error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_load_invalid_json() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("broken.json");
        std::fs::write(&path, "not json").unwrap();

        assert!(matches!(
            FileDataProvider::new(&path).load().await,
            Err(ProviderError::Decode(_))
        ));
    }
}
