//! Property pages
//!
//! Each data page fetches its payload when mounted and renders whatever
//! shape comes back. Failed fetches degrade to an inline fallback and raise
//! an error notification.

mod page_loader;
pub mod page_render;
mod page_state;
pub mod stepper;

pub use page_loader::{PageLoader, failure_notification};
pub use page_render::render_page;
pub use page_state::{PageState, PageStatus};
