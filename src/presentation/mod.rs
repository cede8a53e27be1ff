// Presentation layer - HTTP surface and panel rendering
pub mod app_state;
pub mod charts;
pub mod format;
pub mod handlers;
pub mod layout;
pub mod router;
