//! Page mounting and fetch bookkeeping
//!
//! Mounting a data page sends a fetch to the worker and remembers its
//! request id. Leaving the page cancels the fetch, and any answer that
//! arrives for an older request id is dropped.

use std::sync::mpsc::{Receiver, Sender, TryRecvError};

use tokio_util::sync::CancellationToken;

use super::page_state::{PageState, PageStatus};
use crate::api::{FetchRequest, FetchResponse};
use crate::notification::{NotificationDescriptor, NotificationError, NotificationScope};
use crate::router::Route;

#[derive(Debug, Default)]
pub struct PageLoader {
    request_tx: Option<Sender<FetchRequest>>,
    response_rx: Option<Receiver<FetchResponse>>,
    next_request_id: u64,
    in_flight: Option<CancellationToken>,
}

impl PageLoader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_channels(
        &mut self,
        request_tx: Sender<FetchRequest>,
        response_rx: Receiver<FetchResponse>,
    ) {
        self.request_tx = Some(request_tx);
        self.response_rx = Some(response_rx);
    }

    pub fn has_in_flight(&self) -> bool {
        self.in_flight.is_some()
    }

    /// Mount `route`, cancelling whatever the previous page was fetching
    pub fn mount(
        &mut self,
        route: &Route,
        scope: &mut NotificationScope,
    ) -> Result<PageState, NotificationError> {
        self.cancel_in_flight();

        let Route::Page { page, property_id } = *route else {
            return Ok(PageState::idle(route.clone()));
        };

        self.next_request_id += 1;
        let request_id = self.next_request_id;
        let mut state = PageState {
            route: route.clone(),
            request_id: Some(request_id),
            status: PageStatus::Loading,
        };

        let Some(request_tx) = &self.request_tx else {
            fail(&mut state, "Backend not connected".to_string(), scope)?;
            return Ok(state);
        };

        let cancel_token = CancellationToken::new();
        let request = FetchRequest {
            request_id,
            page,
            property_id,
            cancel_token: cancel_token.clone(),
        };

        if request_tx.send(request).is_err() {
            self.request_tx = None;
            fail(&mut state, "Fetch worker stopped".to_string(), scope)?;
            return Ok(state);
        }

        #[cfg(debug_assertions)]
        log::debug!("Mounted {} with request {}", route, request_id);

        self.in_flight = Some(cancel_token);
        Ok(state)
    }

    /// Apply finished fetches to `page`. Returns true if the page changed.
    pub fn poll(
        &mut self,
        page: &mut PageState,
        scope: &mut NotificationScope,
    ) -> Result<bool, NotificationError> {
        let Some(rx) = &self.response_rx else {
            return Ok(false);
        };

        let mut responses = Vec::new();
        let mut disconnected = false;
        loop {
            match rx.try_recv() {
                Ok(response) => responses.push(response),
                Err(TryRecvError::Empty) => break,
                Err(TryRecvError::Disconnected) => {
                    disconnected = true;
                    break;
                }
            }
        }

        let mut changed = false;
        for response in responses {
            changed |= self.apply(page, response, scope)?;
        }

        if disconnected {
            self.response_rx = None;
            self.request_tx = None;
            self.in_flight = None;
            if page.is_loading() {
                fail(page, "Fetch worker disconnected".to_string(), scope)?;
                changed = true;
            }
        }

        Ok(changed)
    }

    fn apply(
        &mut self,
        page: &mut PageState,
        response: FetchResponse,
        scope: &mut NotificationScope,
    ) -> Result<bool, NotificationError> {
        if page.request_id != Some(response.request_id()) || !page.is_loading() {
            #[cfg(debug_assertions)]
            log::debug!(
                "Dropping response for request {} (page is on {:?})",
                response.request_id(),
                page.request_id
            );
            return Ok(false);
        }

        self.in_flight = None;
        match response {
            FetchResponse::Loaded { body, .. } => {
                page.status = PageStatus::Loaded(body);
            }
            FetchResponse::Failed { error, .. } => {
                fail(page, error, scope)?;
            }
            FetchResponse::Cancelled { .. } => {
                // Only the loader cancels, and it moves to a new request id first
                return Ok(false);
            }
        }
        Ok(true)
    }

    fn cancel_in_flight(&mut self) {
        if let Some(token) = self.in_flight.take() {
            token.cancel();
        }
    }
}

/// Show the inline fallback and raise an error notification with a retry
fn fail(
    page: &mut PageState,
    error: String,
    scope: &mut NotificationScope,
) -> Result<(), NotificationError> {
    scope
        .use_notifications()?
        .show_notification(failure_notification(&page.route, &error));
    page.status = PageStatus::Failed(error);
    Ok(())
}

pub fn failure_notification(route: &Route, error: &str) -> NotificationDescriptor {
    NotificationDescriptor::error(format!("Couldn't load {}", route.title()), error)
        .with_action_label("Retry")
        .with_redirect(route.path())
}

#[cfg(test)]
#[path = "page_loader_tests.rs"]
mod page_loader_tests;
