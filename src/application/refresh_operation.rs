// One fetch-and-render unit bound to a view
use crate::application::data_fetcher::FetchError;
use serde::de::DeserializeOwned;
use std::fmt;
use std::sync::Arc;

type Decoder = dyn Fn(serde_json::Value) -> Result<PreparedRender, FetchError> + Send + Sync;

/// Endpoint path, record shape and render callback. Immutable once built.
#[derive(Clone)]
pub struct RefreshOperation {
    endpoint: String,
    decoder: Arc<Decoder>,
}

impl RefreshOperation {
    /// Build an operation whose response body decodes into `R` and is handed to `render`.
    pub fn new<R, F>(endpoint: impl Into<String>, render: F) -> Self
    where
        R: DeserializeOwned + Send + 'static,
        F: Fn(R) + Send + Sync + 'static,
    {
        let render = Arc::new(render);
        let decoder = move |body: serde_json::Value| -> Result<PreparedRender, FetchError> {
            let records: R =
                serde_json::from_value(body).map_err(|e| FetchError::Malformed(e.to_string()))?;
            let render = render.clone();
            Ok(PreparedRender(Box::new(move || render(records))))
        };

        Self {
            endpoint: endpoint.into(),
            decoder: Arc::new(decoder),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Parse a response body into typed records, ready to render
    pub fn decode(&self, body: serde_json::Value) -> Result<PreparedRender, FetchError> {
        (self.decoder)(body)
    }
}

impl fmt::Debug for RefreshOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RefreshOperation")
            .field("endpoint", &self.endpoint)
            .finish_non_exhaustive()
    }
}

/// Decoded records bound to their render callback
pub struct PreparedRender(Box<dyn FnOnce() + Send>);

impl PreparedRender {
    pub fn render(self) {
        (self.0)()
    }
}
