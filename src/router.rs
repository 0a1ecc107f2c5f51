//! Routing for leadline pages
//!
//! Pages are addressed by path strings so notifications can carry a
//! redirect target without knowing about the app.

mod route;
mod router_state;

pub use route::{PageKind, Route, RouteError};
pub use router_state::Router;

/// Something that can move the UI to another page
pub trait Navigator {
    fn navigate(&mut self, target: &str);
}
