// HTTP routes
use crate::presentation::app_state::AppState;
use crate::presentation::handlers::{
    activate_view, active_view, apply_filters, clear_filters, filter_options, get_filters,
    health_check, panels,
};
use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/healthz", get(health_check))
        .route("/filters/options", get(filter_options))
        .route(
            "/filters",
            get(get_filters).put(apply_filters).delete(clear_filters),
        )
        .route("/views/active", get(active_view))
        .route("/views/:id/activate", post(activate_view))
        .route("/panels", get(panels))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
