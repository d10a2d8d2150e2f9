//! Dataset download over HTTP(S)

use super::DataProvider;
use super::error::ProviderError;
use crate::consts::dashboard_consts::fetch;
use crate::dataset::Dataset;
use reqwest::{Client, ClientBuilder, Response};

// User-Agent string with the dashboard version
const USER_AGENT: &str = concat!("otu-dashboard/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Clone)]
pub struct HttpDataProvider {
    client: Client,
    url: String,
}

impl HttpDataProvider {
    pub fn new(url: impl Into<String>) -> Result<Self, ProviderError> {
        let client = ClientBuilder::new()
            .connect_timeout(fetch::connect_timeout())
            .timeout(fetch::request_timeout())
            .build()?;
        Ok(Self {
            client,
            url: url.into(),
        })
    }

    async fn handle_response_status(response: Response) -> Result<Response, ProviderError> {
        if !response.status().is_success() {
            return Err(ProviderError::from_response(response).await);
        }
        Ok(response)
    }
}

#[async_trait::async_trait]
impl DataProvider for HttpDataProvider {
    fn describe(&self) -> String {
        self.url.clone()
    }

    async fn load(&self) -> Result<Dataset, ProviderError> {
        let response = self
            .client
            .get(&self.url)
            .header("User-Agent", USER_AGENT)
            .header("Accept", "application/json")
            .send()
            .await?;

        let response = Self::handle_response_status(response).await?;
        let bytes = response.bytes().await?;
        Ok(Dataset::from_slice(&bytes)?)
    }
}
