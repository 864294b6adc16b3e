//! Adapter over the backend REST API.
//!
//! Every call resolves to `ApiResult<T>`: business failures (`type: "ERROR"`)
//! and transport failures are both values, never panics or rejected futures.

pub mod client;
pub mod error;
pub mod tracker;

pub use client::{use_api, ApiClient};
pub use error::{classify_response, required_data, ApiError, ApiResult};
pub use tracker::{RequestTicket, RequestTracker};
