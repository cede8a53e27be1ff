// Port for fetching aggregated metrics from the sales API
use crate::domain::query::QueryString;
use async_trait::async_trait;

/// Every way a fetch can go wrong. The dispatcher treats all of them as one failed operation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FetchError {
    #[error("transport failure: {0}")]
    Transport(String),

    #[error("backend returned status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("malformed response body: {0}")]
    Malformed(String),
}

#[async_trait]
pub trait DataFetcher: Send + Sync {
    /// GET `endpoint` scoped by `query` and return the parsed JSON body
    async fn fetch(&self, endpoint: &str, query: &QueryString) -> Result<serde_json::Value, FetchError>;
}
