//! Session setup and initialization

use crate::config::Config;
use crate::consts::dashboard_consts::{DATASET_SOURCE_ENV, DEFAULT_DATASET_URL};
use crate::dataset::ValidDataset;
use crate::provider::{DataSource, ProviderError, load_dataset};
use chrono::Local;

/// Everything the run modes need once the dataset is in memory.
#[derive(Debug)]
pub struct SessionData {
    pub dataset: ValidDataset,
    pub source: DataSource,
    /// Local time the load completed.
    pub loaded_at: String,
}

/// Pick the dataset source: flag, then environment, then config, then the
/// published dataset.
pub fn resolve_source(
    flag: Option<&str>,
    env_value: Option<&str>,
    config: &Config,
) -> DataSource {
    let chosen = flag
        .filter(|s| !s.trim().is_empty())
        .or_else(|| env_value.filter(|s| !s.trim().is_empty()))
        .or_else(|| {
            config
                .dataset_source
                .as_deref()
                .filter(|s| !s.trim().is_empty())
        })
        .unwrap_or(DEFAULT_DATASET_URL);
    DataSource::parse(chosen)
}

/// Resolve the source from the process environment.
pub fn source_from_env(flag: Option<&str>, config: &Config) -> DataSource {
    let env_value = std::env::var(DATASET_SOURCE_ENV).ok();
    resolve_source(flag, env_value.as_deref(), config)
}

/// Load the dataset once. Errors were already logged by the provider layer.
pub async fn setup_session(source: DataSource) -> Result<SessionData, ProviderError> {
    let provider = source.clone().into_provider()?;
    let dataset = load_dataset(provider.as_ref()).await?;
    Ok(SessionData {
        dataset,
        source,
        loaded_at: Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_resolve_source_precedence() {
        let config = Config::default().with_dataset_source("config.json");

        assert_eq!(
            resolve_source(Some("flag.json"), Some("env.json"), &config),
            DataSource::File(PathBuf::from("flag.json"))
        );
        assert_eq!(
            resolve_source(None, Some("https://env.example/samples.json"), &config),
            DataSource::Remote("https://env.example/samples.json".to_string())
        );
        assert_eq!(
            resolve_source(None, None, &config),
            DataSource::File(PathBuf::from("config.json"))
        );
        assert_eq!(
            resolve_source(None, Some("  "), &Config::default()),
            DataSource::Remote(DEFAULT_DATASET_URL.to_string())
        );
    }

    #[tokio::test]
    async fn test_setup_session_missing_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        let source = DataSource::File(dir.path().join("missing.json"));
        assert!(setup_session(source).await.is_err());
    }
}
