use axum::Json;
use serde_json::{json, Value};

/// GET /
/// Liveness check — returns a static status object with the service version.
pub async fn health_handler() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "message": "Career analysis API is running",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}
