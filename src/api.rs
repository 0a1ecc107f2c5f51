//! CRM backend access
//!
//! [`ApiClient`] knows the endpoint layout; the worker runs it off the UI
//! thread.

mod client;
pub mod worker;

pub use client::{ApiClient, ApiError};
pub use worker::{FetchRequest, FetchResponse, spawn_worker};
