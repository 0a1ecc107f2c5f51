//! Fetch worker thread
//!
//! Runs page fetches on a background thread so the UI never blocks on the
//! network. Requests arrive over a channel; each result goes back tagged with
//! its request id so the UI can drop answers for pages it already left.

use std::sync::mpsc::{Receiver, Sender};

use serde_json::Value;
use tokio_util::sync::CancellationToken;

use super::client::{ApiClient, ApiError};
use crate::router::PageKind;

#[derive(Debug, Clone)]
pub struct FetchRequest {
    pub request_id: u64,
    pub page: PageKind,
    pub property_id: u64,
    pub cancel_token: CancellationToken,
}

#[derive(Debug, Clone, PartialEq)]
pub enum FetchResponse {
    Loaded { request_id: u64, body: Value },
    Failed { request_id: u64, error: String },
    Cancelled { request_id: u64 },
}

impl FetchResponse {
    pub fn request_id(&self) -> u64 {
        match self {
            FetchResponse::Loaded { request_id, .. }
            | FetchResponse::Failed { request_id, .. }
            | FetchResponse::Cancelled { request_id } => *request_id,
        }
    }
}

/// Spawn the fetch worker thread
///
/// The thread owns a single-threaded tokio runtime and serves requests until
/// the request channel closes.
pub fn spawn_worker(
    client: ApiClient,
    request_rx: Receiver<FetchRequest>,
    response_tx: Sender<FetchResponse>,
) {
    std::thread::spawn(move || {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build();

        match runtime {
            Ok(rt) => rt.block_on(worker_loop(client, request_rx, response_tx)),
            Err(e) => {
                log::error!("Failed to create fetch runtime: {}", e);
                // Keep answering so pages do not sit in the loading state
                while let Ok(request) = request_rx.recv() {
                    let _ = response_tx.send(FetchResponse::Failed {
                        request_id: request.request_id,
                        error: format!("Fetch worker unavailable: {}", e),
                    });
                }
            }
        }
    });
}

/// Process requests until the channel is closed
///
/// Blocking `recv()` is fine here since this runs on a dedicated thread.
async fn worker_loop(
    client: ApiClient,
    request_rx: Receiver<FetchRequest>,
    response_tx: Sender<FetchResponse>,
) {
    while let Ok(request) = request_rx.recv() {
        let response = handle_fetch(&client, request).await;
        if response_tx.send(response).is_err() {
            // UI thread is gone
            break;
        }
    }

    #[cfg(debug_assertions)]
    log::debug!("Fetch worker exiting");
}

async fn handle_fetch(client: &ApiClient, request: FetchRequest) -> FetchResponse {
    let FetchRequest {
        request_id,
        page,
        property_id,
        cancel_token,
    } = request;

    match client.fetch(page, property_id, &cancel_token).await {
        Ok(body) => {
            #[cfg(debug_assertions)]
            log::debug!("Request {} loaded {:?}/{}", request_id, page, property_id);
            FetchResponse::Loaded { request_id, body }
        }
        Err(ApiError::Cancelled) => FetchResponse::Cancelled { request_id },
        Err(e) => {
            log::error!("Request {} for {:?}/{} failed: {}", request_id, page, property_id, e);
            FetchResponse::Failed {
                request_id,
                error: e.to_string(),
            }
        }
    }
}

#[cfg(test)]
#[path = "worker_tests.rs"]
mod worker_tests;
