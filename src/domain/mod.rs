// Domain layer - Filter, view and metric models
pub mod filter;
pub mod metrics;
pub mod panel;
pub mod query;
pub mod view;
