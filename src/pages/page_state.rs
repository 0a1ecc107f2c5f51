use serde_json::Value;

use crate::router::Route;

#[derive(Debug, Clone, PartialEq)]
pub enum PageStatus {
    /// Page has no backing data (home menu)
    Idle,
    Loading,
    Loaded(Value),
    /// Fetch failed; the message is shown inline as the fallback
    Failed(String),
}

/// The page currently mounted
#[derive(Debug, Clone, PartialEq)]
pub struct PageState {
    pub route: Route,
    /// Id of the fetch this page is waiting for or was filled by
    pub request_id: Option<u64>,
    pub status: PageStatus,
}

impl PageState {
    pub fn idle(route: Route) -> Self {
        Self {
            route,
            request_id: None,
            status: PageStatus::Idle,
        }
    }

    pub fn is_loading(&self) -> bool {
        self.status == PageStatus::Loading
    }

    pub fn body(&self) -> Option<&Value> {
        match &self.status {
            PageStatus::Loaded(body) => Some(body),
            _ => None,
        }
    }
}
