//! Liveness probe.

#[cfg(test)]
#[path = "health_test.rs"]
mod health_test;

use axum::Json;
use axum::Router;
use axum::routing::get;
use serde_json::{Value, json};

pub fn routes() -> Router {
    Router::new().route("/healthz", get(healthz))
}

async fn healthz() -> Json<Value> {
    Json(json!({ "ok": true }))
}
