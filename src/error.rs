//! Unified SDK error types.
//!
//! Every fetch surfaces as a single [`FetchError`]: opaque beyond its
//! human-readable message, never fatal. A store keeps its last-known-good
//! list after any failed fetch.

use thiserror::Error;

/// Top-level error returned by every fetch operation.
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("HTTP error: {0}")]
    Http(#[from] HttpError),

    #[error("Preference store error: {0}")]
    Prefs(#[from] crate::prefs::PrefsError),
}

/// HTTP-layer errors.
#[derive(Error, Debug)]
pub enum HttpError {
    #[cfg(feature = "http")]
    #[error("Request failed: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("Server error {status}: {body}")]
    ServerError { status: u16, body: String },

    #[error("Rate limited")]
    RateLimited,

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Bad request: {0}")]
    BadRequest(String),
}
