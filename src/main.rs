// Main entry point - Dependency injection and server setup
mod application;
mod domain;
mod infrastructure;
mod presentation;

use std::{net::SocketAddr, sync::Arc, time::Duration};

use crate::application::dashboard_controller::DashboardController;
use crate::application::refresh_dispatcher::RefreshDispatcher;
use crate::infrastructure::config::load_dashboard_config;
use crate::infrastructure::panel_board::PanelBoard;
use crate::infrastructure::sales_api::SalesApiClient;
use crate::presentation::app_state::AppState;
use crate::presentation::layout::default_registry;
use crate::presentation::router::build_router;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    // Load configuration
    let config = load_dashboard_config()?;

    // Create adapters (infrastructure layer)
    let fetcher = Arc::new(SalesApiClient::new(
        config.api.base_url.clone(),
        Duration::from_secs(config.api.timeout_secs),
    )?);
    let panels_board = Arc::new(PanelBoard::new());

    // Wire the controller (application layer)
    let registry = default_registry(panels_board.clone());
    let dispatcher = RefreshDispatcher::new(registry, fetcher.clone());
    let controller = Arc::new(DashboardController::new(
        dispatcher,
        fetcher,
        config.dashboard.default_view,
    ));

    let report = controller.start().await;
    tracing::info!(
        "Initial {} view: {} panels rendered, {} failed",
        report.view,
        report.rendered,
        report.failures.len()
    );
    if !report.is_clean() {
        tracing::warn!("Initial refresh incomplete: {:?}", report.failures);
    }

    let state = Arc::new(AppState {
        controller,
        panels: panels_board,
    });

    // Build router (presentation layer)
    let router = build_router(state);

    // Start server
    let addr: SocketAddr = config.server.bind_addr.parse()?;
    tracing::info!("Starting sales-dashboard on {} (API {})", addr, config.api.base_url);

    axum::serve(tokio::net::TcpListener::bind(addr).await?, router).await?;

    Ok(())
}
