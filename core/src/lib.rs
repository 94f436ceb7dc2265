//! Synchronous API client core for case boards.
//!
//! # Overview
//! Builds `HttpRequest` values and parses `HttpResponse` values without
//! touching the network (host-does-IO pattern). The caller executes the
//! actual HTTP round-trip, making the core fully deterministic and testable.
//!
//! # Design
//! - `BoardClient` is stateless — it holds only the base URL, resolved once
//!   at construction to end in `/api/v1` exactly once.
//! - Each operation is split into `build_*` (produces request) and
//!   `parse_*` (consumes response), so the I/O boundary is explicit.
//! - The backend may have never stored a board, or may hold a partially
//!   shaped payload; `normalize_board_state` coerces whatever comes back
//!   into the canonical `{ items, lines }` shape, so `parse_load_board`
//!   always returns a well-formed `BoardState`.
//! - DTOs are defined independently from the mock-server crate; integration
//!   tests catch schema drift.

pub mod client;
pub mod error;
pub mod http;
pub mod types;

pub use client::BoardClient;
pub use error::ApiError;
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use types::{normalize_board_state, BoardState, CaseBoard};
