// Refresh dispatcher - runs every operation registered for a view
use crate::application::data_fetcher::DataFetcher;
use crate::application::refresh_operation::RefreshOperation;
use crate::application::view_registry::ViewRegistry;
use crate::domain::filter::FilterState;
use crate::domain::query::{encode, QueryString};
use crate::domain::view::ViewId;
use futures::future::join_all;
use serde::Serialize;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};

/// Per-view refresh counters. Only the latest issued refresh of a view may render.
#[derive(Debug, Default)]
pub struct SequenceTracker {
    latest: Mutex<HashMap<ViewId, u64>>,
}

impl SequenceTracker {
    pub fn issue(&self, view: ViewId) -> u64 {
        let (sequence, _, ()) = self.issue_with(|| (view, ()));
        sequence
    }

    /// Take a snapshot and number it in one critical section, so a later snapshot
    /// can never receive an earlier sequence.
    pub fn issue_with<T>(&self, snapshot: impl FnOnce() -> (ViewId, T)) -> (u64, ViewId, T) {
        let mut latest = self.latest.lock().unwrap_or_else(PoisonError::into_inner);
        let (view, value) = snapshot();
        let counter = latest.entry(view).or_insert(0);
        *counter += 1;
        (*counter, view, value)
    }

    pub fn latest(&self, view: ViewId) -> u64 {
        self.latest
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&view)
            .copied()
            .unwrap_or(0)
    }

    /// Run `f` only if `sequence` is still the latest for `view`.
    /// The lock is held across `f` so no newer refresh can be issued in between.
    pub fn run_if_current<T>(&self, view: ViewId, sequence: u64, f: impl FnOnce() -> T) -> Option<T> {
        let latest = self.latest.lock().unwrap_or_else(PoisonError::into_inner);
        if latest.get(&view).copied().unwrap_or(0) == sequence {
            Some(f())
        } else {
            None
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OperationFailure {
    pub endpoint: String,
    pub message: String,
}

/// Outcome of one `refresh` call
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RefreshReport {
    pub view: ViewId,
    pub sequence: u64,
    pub query: String,
    pub rendered: usize,
    pub discarded: usize,
    pub failures: Vec<OperationFailure>,
}

impl RefreshReport {
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty() && self.discarded == 0
    }
}

/// A numbered refresh waiting to be run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RefreshTicket {
    pub view: ViewId,
    pub sequence: u64,
    pub state: FilterState,
}

enum Outcome {
    Rendered,
    Discarded,
    Failed(OperationFailure),
}

pub struct RefreshDispatcher {
    registry: ViewRegistry,
    fetcher: Arc<dyn DataFetcher>,
    sequences: SequenceTracker,
}

impl RefreshDispatcher {
    pub fn new(registry: ViewRegistry, fetcher: Arc<dyn DataFetcher>) -> Self {
        Self {
            registry,
            fetcher,
            sequences: SequenceTracker::default(),
        }
    }

    /// Make any in-flight results for `view` stale without dispatching a new refresh
    pub fn invalidate(&self, view: ViewId) {
        let sequence = self.sequences.issue(view);
        tracing::debug!("Invalidated view {} at sequence {}", view, sequence);
    }

    /// Number a refresh of whatever view and filter `snapshot` captures
    pub fn begin(&self, snapshot: impl FnOnce() -> (ViewId, FilterState)) -> RefreshTicket {
        let (sequence, view, state) = self.sequences.issue_with(snapshot);
        RefreshTicket {
            view,
            sequence,
            state,
        }
    }

    pub async fn refresh(&self, view: ViewId, state: &FilterState) -> RefreshReport {
        let ticket = self.begin(|| (view, state.clone()));
        self.run(ticket).await
    }

    pub async fn run(&self, ticket: RefreshTicket) -> RefreshReport {
        let RefreshTicket {
            view,
            sequence,
            state,
        } = ticket;
        let query = encode(&state);
        let operations = self.registry.operations_for(view);

        tracing::debug!(
            "Refreshing view {} (sequence {}, {} operations, query '{}')",
            view,
            sequence,
            operations.len(),
            query
        );

        let outcomes = join_all(
            operations
                .iter()
                .map(|operation| self.run_operation(view, sequence, operation, &query)),
        )
        .await;

        let mut report = RefreshReport {
            view,
            sequence,
            query: query.to_string(),
            rendered: 0,
            discarded: 0,
            failures: Vec::new(),
        };
        for outcome in outcomes {
            match outcome {
                Outcome::Rendered => report.rendered += 1,
                Outcome::Discarded => report.discarded += 1,
                Outcome::Failed(failure) => report.failures.push(failure),
            }
        }
        report
    }

    async fn run_operation(
        &self,
        view: ViewId,
        sequence: u64,
        operation: &RefreshOperation,
        query: &QueryString,
    ) -> Outcome {
        let prepared = self
            .fetcher
            .fetch(operation.endpoint(), query)
            .await
            .and_then(|body| operation.decode(body));

        let prepared = match prepared {
            Ok(prepared) => prepared,
            Err(e) => {
                tracing::error!("Error refreshing {} for view {}: {}", operation.endpoint(), view, e);
                return Outcome::Failed(OperationFailure {
                    endpoint: operation.endpoint().to_string(),
                    message: e.to_string(),
                });
            }
        };

        match self.sequences.run_if_current(view, sequence, || prepared.render()) {
            Some(()) => Outcome::Rendered,
            None => {
                tracing::debug!(
                    "Discarding stale result from {} (view {}, sequence {}, latest {})",
                    operation.endpoint(),
                    view,
                    sequence,
                    self.sequences.latest(view)
                );
                Outcome::Discarded
            }
        }
    }
}
