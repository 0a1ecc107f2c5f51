//! leadline library - property pages and notifications for a real-estate CRM
//!
//! This library exposes the core functionality of leadline for testing purposes.

pub mod api;
pub mod app;
pub mod config;
pub mod error;
pub mod notification;
pub mod pages;
pub mod router;

#[cfg(test)]
pub mod test_utils;
pub mod theme;
pub mod widgets;

// Re-export commonly used types for convenience
pub use app::App;
pub use config::Config;
