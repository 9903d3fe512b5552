//! HTTP client for the swing analysis backend.
//!
//! The backend exposes one operation: POST two swing videos as multipart
//! form data, get back a JSON [`crate::models::AnalysisReport`]. Failures
//! carry a `detail` string in the body. The service root also answers a
//! GET with a status message, which the UI uses as a startup health probe.

mod client;
mod error;

pub use client::{ApiClient, DEFAULT_ENDPOINT};
pub use error::{ApiError, ApiResult, GENERIC_ERROR_DETAIL};
