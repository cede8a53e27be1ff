// Test doubles for the fetch and render ports
use crate::application::data_fetcher::{DataFetcher, FetchError};
use crate::application::render_surface::RenderSurface;
use crate::domain::panel::Panel;
use crate::domain::query::QueryString;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;
use tokio::sync::oneshot;

/// Fetcher that answers from a script: per-endpoint bodies or failures,
/// a default body, or gates the test releases by hand.
#[derive(Default)]
pub struct ScriptedFetcher {
    default_body: Option<serde_json::Value>,
    bodies: HashMap<String, serde_json::Value>,
    failures: HashMap<String, FetchError>,
    gates: Mutex<HashMap<(String, String), oneshot::Receiver<serde_json::Value>>>,
    calls: Mutex<Vec<(String, String)>>,
}

impl ScriptedFetcher {
    pub fn answering(body: serde_json::Value) -> Self {
        Self {
            default_body: Some(body),
            ..Default::default()
        }
    }

    pub fn gated() -> Self {
        Self::default()
    }

    pub fn with_body(mut self, endpoint: &str, body: serde_json::Value) -> Self {
        self.bodies.insert(endpoint.to_string(), body);
        self
    }

    pub fn fail_with_status(mut self, endpoint: &str, status: u16) -> Self {
        self.failures.insert(
            endpoint.to_string(),
            FetchError::Status {
                status,
                body: "Internal Server Error".to_string(),
            },
        );
        self
    }

    pub fn fail_with_transport(mut self, endpoint: &str) -> Self {
        self.failures.insert(
            endpoint.to_string(),
            FetchError::Transport("connection refused".to_string()),
        );
        self
    }

    /// Hold the response for `endpoint` with encoded `query` until the returned sender fires
    pub fn gate(&self, endpoint: &str, query: &str) -> oneshot::Sender<serde_json::Value> {
        let (tx, rx) = oneshot::channel();
        self.gates
            .lock()
            .unwrap()
            .insert((endpoint.to_string(), query.to_string()), rx);
        tx
    }

    pub fn endpoints(&self) -> Vec<String> {
        self.calls.lock().unwrap().iter().map(|(e, _)| e.clone()).collect()
    }

    pub fn queries(&self) -> Vec<String> {
        self.calls.lock().unwrap().iter().map(|(_, q)| q.clone()).collect()
    }
}

#[async_trait]
impl DataFetcher for ScriptedFetcher {
    async fn fetch(&self, endpoint: &str, query: &QueryString) -> Result<serde_json::Value, FetchError> {
        let query = query.to_string();
        self.calls
            .lock()
            .unwrap()
            .push((endpoint.to_string(), query.clone()));

        if let Some(error) = self.failures.get(endpoint) {
            return Err(error.clone());
        }

        let gate = self
            .gates
            .lock()
            .unwrap()
            .remove(&(endpoint.to_string(), query));
        if let Some(gate) = gate {
            return gate
                .await
                .map_err(|_| FetchError::Transport("gate dropped".to_string()));
        }

        self.bodies
            .get(endpoint)
            .or(self.default_body.as_ref())
            .cloned()
            .ok_or_else(|| FetchError::Status {
                status: 404,
                body: format!("no scripted body for {}", endpoint),
            })
    }
}

/// Render surface that keeps every draw
#[derive(Default)]
pub struct RecordingSurface {
    draws: Mutex<Vec<(String, Panel)>>,
}

impl RecordingSurface {
    pub fn latest(&self, target: &str) -> Option<Panel> {
        self.draws
            .lock()
            .unwrap()
            .iter()
            .rev()
            .find(|(t, _)| t == target)
            .map(|(_, panel)| panel.clone())
    }

    pub fn draws(&self, target: &str) -> usize {
        self.draws
            .lock()
            .unwrap()
            .iter()
            .filter(|(t, _)| t == target)
            .count()
    }

    pub fn targets(&self) -> Vec<String> {
        let mut targets: Vec<String> = self
            .draws
            .lock()
            .unwrap()
            .iter()
            .map(|(t, _)| t.clone())
            .collect();
        targets.sort();
        targets.dedup();
        targets
    }
}

impl RenderSurface for RecordingSurface {
    fn draw(&self, target: &str, panel: Panel) {
        self.draws.lock().unwrap().push((target.to_string(), panel));
    }
}
