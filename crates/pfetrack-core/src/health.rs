use axum::Json;
use serde_json::{Value, json};

/// Handler for `GET /health` — static liveness payload.
pub async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}
