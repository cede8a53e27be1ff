// Sales API client - reqwest implementation of the data fetch port
use crate::application::data_fetcher::{DataFetcher, FetchError};
use crate::domain::query::QueryString;
use async_trait::async_trait;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct SalesApiClient {
    base_url: String,
    client: reqwest::Client,
}

impl SalesApiClient {
    pub fn new(base_url: String, timeout: Duration) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        })
    }

    fn build_url(&self, endpoint: &str, query: &QueryString) -> String {
        if query.is_empty() {
            format!("{}{}", self.base_url, endpoint)
        } else {
            format!("{}{}?{}", self.base_url, endpoint, query)
        }
    }
}

#[async_trait]
impl DataFetcher for SalesApiClient {
    async fn fetch(&self, endpoint: &str, query: &QueryString) -> Result<serde_json::Value, FetchError> {
        let url = self.build_url(endpoint, query);
        tracing::debug!("GET {}", url);

        let response = self
            .client
            .get(&url)
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| FetchError::Transport(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(FetchError::Status {
                status: status.as_u16(),
                body,
            });
        }

        response
            .json::<serde_json::Value>()
            .await
            .map_err(|e| FetchError::Malformed(e.to_string()))
    }
}
