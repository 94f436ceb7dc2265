//! Stateless HTTP request builder and response parser for the board API.
//!
//! # Design
//! `BoardClient` holds only the resolved base URL and carries no mutable
//! state between calls. Each operation is split into a `build_*` method that
//! produces an `HttpRequest` and a `parse_*` method that consumes an
//! `HttpResponse`. The caller executes the actual HTTP round-trip, keeping
//! the core deterministic and free of I/O dependencies; cancellation, if the
//! host wants it, happens on the host's side of that boundary.
//!
//! No ordering is imposed between overlapping operations on the same case —
//! if two saves race, the last response received determines the remote
//! state. Hosts that need ordering must serialize their round-trips.

use serde::Serialize;

use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::{normalize_board_state, BoardState, CaseBoard};

/// Fallback base URL when `API_BASE_URL` is not set.
const DEFAULT_BASE_URL: &str = "http://localhost:3000";

/// Wire payload for the save operation; the server stores the inner state
/// verbatim under `boardState`.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SaveBoardBody<'a> {
    board_state: &'a BoardState,
}

/// Synchronous, stateless client for the board API.
///
/// Builds `HttpRequest` values and parses `HttpResponse` values without
/// touching the network. The caller is responsible for executing the HTTP
/// round-trip between `build_*` and `parse_*`.
#[derive(Debug, Clone)]
pub struct BoardClient {
    base_url: String,
}

impl BoardClient {
    /// Resolve `raw_base_url` into the canonical base URL: strip one
    /// trailing slash, then ensure exactly one `/api/v1` suffix. Accepts
    /// either `http://host:port` or a full `http://host:port/api/v1`.
    pub fn new(raw_base_url: &str) -> Self {
        let trimmed = raw_base_url.strip_suffix('/').unwrap_or(raw_base_url);
        let base_url = if trimmed.ends_with("/api/v1") {
            trimmed.to_string()
        } else {
            format!("{trimmed}/api/v1")
        };
        Self { base_url }
    }

    /// Build a client from the `API_BASE_URL` environment variable,
    /// defaulting to the local development server. Intended to be called
    /// once at application startup; the resulting client is the handle the
    /// rest of the program passes around.
    pub fn from_env() -> Self {
        let raw = std::env::var("API_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        Self::new(&raw)
    }

    /// The canonical base URL every request path is appended to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Generic request constructor: appends `path` to the base URL and
    /// merges a default `content-type: application/json` header with
    /// `headers`. Caller-supplied headers win on a conflicting key
    /// (compared case-insensitively).
    pub fn build_request(
        &self,
        method: HttpMethod,
        path: &str,
        headers: Vec<(String, String)>,
        body: Option<String>,
    ) -> HttpRequest {
        let mut merged: Vec<(String, String)> =
            vec![("content-type".to_string(), "application/json".to_string())];
        merged.retain(|(key, _)| !headers.iter().any(|(h, _)| h.eq_ignore_ascii_case(key)));
        merged.extend(headers);

        HttpRequest {
            method,
            url: format!("{}{path}", self.base_url),
            headers: merged,
            body,
        }
    }

    pub fn build_load_board(&self, case_id: &str) -> HttpRequest {
        self.build_request(HttpMethod::Get, &board_path(case_id), Vec::new(), None)
    }

    /// Decode the `CaseBoard` record and normalize its `boardState`.
    ///
    /// Always yields a well-formed `BoardState`: a backend that has never
    /// stored a board replies with `boardState: null`, which normalizes to
    /// the empty state. `case_id` and `updated_at` are discarded.
    pub fn parse_load_board(
        &self,
        case_id: &str,
        response: HttpResponse,
    ) -> Result<BoardState, ApiError> {
        self.check_status(case_id, &response)?;
        let record: CaseBoard = serde_json::from_str(&response.body)
            .map_err(|e| ApiError::DeserializationError(e.to_string()))?;
        Ok(normalize_board_state(record.board_state))
    }

    /// PUT the state as-is, unnormalized, wrapped in `{"boardState": ...}`.
    pub fn build_save_board(
        &self,
        case_id: &str,
        state: &BoardState,
    ) -> Result<HttpRequest, ApiError> {
        let body = serde_json::to_string(&SaveBoardBody { board_state: state })
            .map_err(|e| ApiError::SerializationError(e.to_string()))?;
        Ok(self.build_request(
            HttpMethod::Put,
            &board_path(case_id),
            Vec::new(),
            Some(body),
        ))
    }

    /// The server echoes the stored `CaseBoard`; only the status matters
    /// here and the body is dropped.
    pub fn parse_save_board(&self, case_id: &str, response: HttpResponse) -> Result<(), ApiError> {
        self.check_status(case_id, &response)
    }

    /// Map any non-2xx status to `RequestFailed` carrying the request URL.
    fn check_status(&self, case_id: &str, response: &HttpResponse) -> Result<(), ApiError> {
        if response.is_success() {
            return Ok(());
        }
        Err(ApiError::RequestFailed {
            status: response.status,
            url: format!("{}{}", self.base_url, board_path(case_id)),
        })
    }
}

fn board_path(case_id: &str) -> String {
    format!("/cases/{case_id}/board")
}
