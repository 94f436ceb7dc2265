use std::{
    collections::HashMap,
    sync::Arc,
    time::{SystemTime, UNIX_EPOCH},
};

use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tokio::{net::TcpListener, sync::RwLock};

/// The case board record as the backend serves it. `board_state` is stored
/// verbatim from the last PUT; a case that has never been saved is answered
/// with `boardState: null` rather than an error.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CaseBoard {
    pub case_id: String,
    pub board_state: Option<Value>,
    pub updated_at: String,
}

/// PUT payload. `board_state` is plain `Value` rather than `Option` so a
/// body missing the field is rejected instead of silently defaulting to
/// `None`; an explicit JSON null is still accepted and stored as null.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveBoard {
    pub board_state: Value,
}

pub struct StoredBoard {
    pub board_state: Option<Value>,
    pub updated_at: String,
}

pub type Db = Arc<RwLock<HashMap<String, StoredBoard>>>;

pub fn app() -> Router {
    let db: Db = Arc::new(RwLock::new(HashMap::new()));
    Router::new()
        .route(
            "/api/v1/cases/{case_id}/board",
            get(get_board).put(put_board),
        )
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

fn timestamp() -> String {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs().to_string())
        .unwrap_or_else(|_| "0".to_string())
}

async fn get_board(State(db): State<Db>, Path(case_id): Path<String>) -> Json<CaseBoard> {
    let boards = db.read().await;
    let record = match boards.get(&case_id) {
        Some(stored) => CaseBoard {
            case_id,
            board_state: stored.board_state.clone(),
            updated_at: stored.updated_at.clone(),
        },
        None => CaseBoard {
            case_id,
            board_state: None,
            updated_at: timestamp(),
        },
    };
    Json(record)
}

async fn put_board(
    State(db): State<Db>,
    Path(case_id): Path<String>,
    Json(input): Json<SaveBoard>,
) -> Json<CaseBoard> {
    let stored = StoredBoard {
        board_state: Some(input.board_state),
        updated_at: timestamp(),
    };
    let record = CaseBoard {
        case_id: case_id.clone(),
        board_state: stored.board_state.clone(),
        updated_at: stored.updated_at.clone(),
    };
    db.write().await.insert(case_id, stored);
    Json(record)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn case_board_serializes_with_camel_case_keys() {
        let record = CaseBoard {
            case_id: "c1".to_string(),
            board_state: None,
            updated_at: "t".to_string(),
        };
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["caseId"], "c1");
        assert_eq!(json["boardState"], Value::Null);
        assert_eq!(json["updatedAt"], "t");
    }

    #[test]
    fn save_board_accepts_arbitrary_state() {
        let input: SaveBoard =
            serde_json::from_str(r#"{"boardState":{"items":{"a":1},"lines":[]}}"#).unwrap();
        assert_eq!(input.board_state, json!({"items": {"a": 1}, "lines": []}));
    }

    #[test]
    fn save_board_accepts_null_state() {
        let input: SaveBoard = serde_json::from_str(r#"{"boardState":null}"#).unwrap();
        assert_eq!(input.board_state, Value::Null);
    }

    #[test]
    fn save_board_rejects_missing_board_state() {
        let result: Result<SaveBoard, _> = serde_json::from_str(r#"{}"#);
        assert!(result.is_err());
    }

    #[test]
    fn timestamp_is_numeric_seconds() {
        let ts = timestamp();
        assert!(ts.parse::<u64>().is_ok());
    }
}
