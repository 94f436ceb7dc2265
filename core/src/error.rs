//! Error types for the board API client.
//!
//! # Design
//! There is exactly one HTTP-level failure kind: `RequestFailed`, carrying
//! the status code and the URL that produced it. The board layer does not
//! distinguish 404 from any other non-2xx status — a missing case and a
//! broken server both propagate to the caller unmodified, and the only
//! resilience mechanism lives in `normalize_board_state`, which substitutes
//! safe defaults instead of raising.

use std::fmt;

/// Errors returned by `BoardClient` build and parse methods.
#[derive(Debug)]
pub enum ApiError {
    /// The server returned a non-2xx status.
    RequestFailed { status: u16, url: String },

    /// The response body could not be deserialized into the expected type.
    DeserializationError(String),

    /// The request payload could not be serialized to JSON.
    SerializationError(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::RequestFailed { status, url } => {
                write!(f, "API error {status} for {url}")
            }
            ApiError::DeserializationError(msg) => {
                write!(f, "deserialization failed: {msg}")
            }
            ApiError::SerializationError(msg) => {
                write!(f, "serialization failed: {msg}")
            }
        }
    }
}

impl std::error::Error for ApiError {}
