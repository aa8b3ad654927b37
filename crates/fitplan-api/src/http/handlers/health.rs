//! Liveness endpoint.

use axum::Json;
use serde_json::{Value, json};

/// GET /ping - Always `{"status": "ok"}`. No auth, no side effects.
pub async fn ping() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}
