//! Navigation history
//!
//! The router keeps a stack of visited routes. Navigating records what
//! happened so the app can mount the new page (or report a bad target)
//! once the current event is handled.

use super::Navigator;
use super::route::{Route, RouteError};

#[derive(Debug)]
pub struct Router {
    history: Vec<Route>,
    mount_pending: bool,
    rejected: Option<RouteError>,
}

impl Router {
    pub fn new(start: Route) -> Self {
        Self {
            history: vec![start],
            mount_pending: true,
            rejected: None,
        }
    }

    pub fn current(&self) -> &Route {
        debug_assert!(!self.history.is_empty(), "router history lost its root entry");
        self.history.last().unwrap_or(&Route::Home)
    }

    /// Push a route. Pushing the current route remounts it instead.
    pub fn push(&mut self, route: Route) {
        #[cfg(debug_assertions)]
        log::debug!("Navigating {} -> {}", self.current(), route);

        if *self.current() != route {
            self.history.push(route);
        }
        self.mount_pending = true;
    }

    /// Go back one entry. Returns false when already at the root.
    pub fn back(&mut self) -> bool {
        if self.history.len() <= 1 {
            return false;
        }
        self.history.pop();
        self.mount_pending = true;
        true
    }

    pub fn depth(&self) -> usize {
        self.history.len()
    }

    /// Whether the current route changed since the last call
    pub fn take_mount_pending(&mut self) -> bool {
        std::mem::take(&mut self.mount_pending)
    }

    /// Navigation target that could not be parsed since the last call
    pub fn take_rejected(&mut self) -> Option<RouteError> {
        self.rejected.take()
    }
}

impl Navigator for Router {
    fn navigate(&mut self, target: &str) {
        match Route::parse(target) {
            Ok(route) => self.push(route),
            Err(e) => {
                log::error!("Rejected navigation to '{}': {}", target, e);
                self.rejected = Some(e);
            }
        }
    }
}
