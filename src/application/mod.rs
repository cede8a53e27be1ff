// Application layer - Filter-driven refresh controller and its ports
pub mod dashboard_controller;
pub mod data_fetcher;
pub mod filter_store;
pub mod refresh_dispatcher;
pub mod refresh_operation;
pub mod render_surface;
pub mod view_registry;

#[cfg(test)]
pub mod test_support;
