//! Domain DTOs for the board API, plus board-state normalization.
//!
//! # Design
//! These types mirror the backend's schema but are defined independently
//! from the mock-server crate; integration tests catch schema drift. The
//! shapes of individual items and lines are opaque to this layer — it only
//! guarantees that `items` is a JSON object and `lines` a JSON array, which
//! the Rust field types make structural rather than something checked at
//! runtime.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// The persisted layout of items and connecting lines for one case.
///
/// `items` maps item IDs to item payloads; `lines` is an ordered sequence of
/// line descriptors. Both interiors are opaque `Value`s — the board UI owns
/// their meaning.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct BoardState {
    pub items: Map<String, Value>,
    pub lines: Vec<Value>,
}

/// The server-side board record, read-only from this crate's perspective.
///
/// `board_state` stays an untyped `Value` so that a backend that has never
/// stored a board (null) or holds a corrupted payload still deserializes;
/// `normalize_board_state` decides what survives. `case_id` and `updated_at`
/// are decoded but never consumed by the load path.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CaseBoard {
    pub case_id: String,
    #[serde(default)]
    pub board_state: Option<Value>,
    pub updated_at: String,
}

/// Coerce a possibly-null, possibly-malformed board payload into the
/// canonical shape. Total: every input produces a valid `BoardState`.
///
/// `None`, JSON null, and any non-object collapse to the empty state. For
/// objects, each field is kept only if it has the right JSON type — `items`
/// must be an object, `lines` an array — and replaced with its empty default
/// otherwise. Extraneous fields are discarded.
pub fn normalize_board_state(raw: Option<Value>) -> BoardState {
    let Some(Value::Object(mut obj)) = raw else {
        return BoardState::default();
    };

    let items = match obj.remove("items") {
        Some(Value::Object(map)) => map,
        _ => Map::new(),
    };
    let lines = match obj.remove("lines") {
        Some(Value::Array(seq)) => seq,
        _ => Vec::new(),
    };

    BoardState { items, lines }
}
