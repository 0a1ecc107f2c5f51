//! HTTP client for the CRM backend
//!
//! Every page is a `GET {base_url}/api/<segment>/{id}` returning JSON.
//! The body is not validated against any schema.

use std::time::Duration;

use serde_json::Value;
use thiserror::Error;
use tokio_util::sync::CancellationToken;

use crate::router::PageKind;

#[derive(Debug, Error)]
pub enum ApiError {
    /// Could not build the HTTP client
    #[error("Client setup failed: {0}")]
    Setup(String),

    /// Connection, timeout or transport failure
    #[error("Network error: {0}")]
    Network(String),

    /// Backend answered with a non-success status
    #[error("Server returned {code} for {url}")]
    Status { code: u16, url: String },

    /// Body was not JSON
    #[error("Invalid JSON from {url}: {message}")]
    InvalidJson { url: String, message: String },

    /// Request was cancelled
    #[error("Request cancelled")]
    Cancelled,
}

#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, ApiError> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ApiError::Setup(e.to_string()))?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn endpoint_url(&self, page: PageKind, property_id: u64) -> String {
        format!("{}/api/{}/{}", self.base_url, page.segment(), property_id)
    }

    /// Fetch one page payload, racing the request against `cancel_token`
    pub async fn fetch(
        &self,
        page: PageKind,
        property_id: u64,
        cancel_token: &CancellationToken,
    ) -> Result<Value, ApiError> {
        if cancel_token.is_cancelled() {
            return Err(ApiError::Cancelled);
        }

        let url = self.endpoint_url(page, property_id);

        tokio::select! {
            biased;

            _ = cancel_token.cancelled() => {
                #[cfg(debug_assertions)]
                log::debug!("Fetch of {} cancelled", url);
                Err(ApiError::Cancelled)
            }

            result = self.get_json(&url) => result,
        }
    }

    async fn get_json(&self, url: &str) -> Result<Value, ApiError> {
        #[cfg(debug_assertions)]
        log::debug!("GET {}", url);

        let response = self
            .http
            .get(url)
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status {
                code: status.as_u16(),
                url: url.to_string(),
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        serde_json::from_str(&body).map_err(|e| ApiError::InvalidJson {
            url: url.to_string(),
            message: e.to_string(),
        })
    }
}
