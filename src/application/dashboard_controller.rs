// Dashboard controller - filter state, active view and refresh dispatch
use crate::application::data_fetcher::{DataFetcher, FetchError};
use crate::application::filter_store::FilterStore;
use crate::application::refresh_dispatcher::{RefreshDispatcher, RefreshReport};
use crate::domain::filter::{FilterError, FilterOptions, FilterState};
use crate::domain::query::QueryString;
use crate::domain::view::ViewId;
use std::sync::{Arc, Mutex, PoisonError};

pub const FILTER_OPTIONS_ENDPOINT: &str = "/api/filters";

/// Owns the single filter state and active view. All mutation funnels through
/// `apply`, `clear` and `activate`, each followed by a refresh of the active view.
pub struct DashboardController {
    filters: FilterStore,
    options: Mutex<FilterOptions>,
    active: Mutex<ViewId>,
    dispatcher: RefreshDispatcher,
    fetcher: Arc<dyn DataFetcher>,
}

impl DashboardController {
    pub fn new(dispatcher: RefreshDispatcher, fetcher: Arc<dyn DataFetcher>, default_view: ViewId) -> Self {
        Self {
            filters: FilterStore::default(),
            options: Mutex::new(FilterOptions::default()),
            active: Mutex::new(default_view),
            dispatcher,
            fetcher,
        }
    }

    /// Load filter options, seed the filter from them and render the default view.
    /// A failed options fetch leaves the filter empty; the dashboard still loads.
    pub async fn start(&self) -> RefreshReport {
        if let Err(e) = self.load_filter_options().await {
            tracing::error!("Error loading filter options: {}", e);
        }
        self.refresh_active().await
    }

    pub async fn load_filter_options(&self) -> Result<FilterOptions, FetchError> {
        let body = self
            .fetcher
            .fetch(FILTER_OPTIONS_ENDPOINT, &QueryString::default())
            .await?;
        let options: FilterOptions =
            serde_json::from_value(body).map_err(|e| FetchError::Malformed(e.to_string()))?;

        tracing::info!(
            "Loaded filter options: {} cities, {} channels",
            options.cities.len(),
            options.channels.len()
        );

        if let Err(e) = self.filters.apply(options.initial_state()) {
            tracing::warn!("Ignoring date range from filter options: {}", e);
        }
        *self.options.lock().unwrap_or_else(PoisonError::into_inner) = options.clone();
        Ok(options)
    }

    pub fn filter_state(&self) -> FilterState {
        self.filters.get_state()
    }

    pub fn filter_options(&self) -> FilterOptions {
        self.options
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn active_view(&self) -> ViewId {
        *self.active.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub async fn apply(&self, next: FilterState) -> Result<RefreshReport, FilterError> {
        self.filters.apply(next)?;
        tracing::info!("Applied filters: {:?}", self.filters.get_state());
        Ok(self.refresh_active().await)
    }

    pub async fn clear(&self) -> RefreshReport {
        self.filters.clear();
        tracing::info!("Cleared filters");
        self.refresh_active().await
    }

    /// Switch the active view and refresh it. Re-activating the current view forces a refresh.
    pub async fn activate(&self, view: ViewId) -> RefreshReport {
        let previous = {
            let mut active = self.active.lock().unwrap_or_else(PoisonError::into_inner);
            std::mem::replace(&mut *active, view)
        };
        if previous != view {
            self.dispatcher.invalidate(previous);
            tracing::info!("Switched view {} -> {}", previous, view);
        }
        self.refresh_active().await
    }

    /// Refresh the active view with the current filter. The snapshot and its
    /// sequence number are taken together so rendered panels follow the latest filter.
    pub async fn refresh_active(&self) -> RefreshReport {
        let ticket = self
            .dispatcher
            .begin(|| (self.active_view(), self.filters.get_state()));
        self.dispatcher.run(ticket).await
    }
}
