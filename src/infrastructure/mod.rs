// Infrastructure layer - External dependencies and adapters
pub mod config;
pub mod panel_board;
pub mod sales_api;
