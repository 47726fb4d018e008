use axum::routing::get;
use axum::{Json, Router};
use serde_json::{json, Value};

pub fn router() -> Router {
    Router::new().route("/status", get(get_status))
}

/// Liveness check, fixed payload.
async fn get_status() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}
