//! Liveness endpoint (/api/health)

use axum::{Json, Router, routing::get};
use serde_json::{Value, json};
use std::sync::Arc;

use crate::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new().route("/api/health", get(health))
}

/// GET /api/health - Always ok, touches neither store nor providers
async fn health() -> Json<Value> {
    Json(json!({ "ok": true }))
}
