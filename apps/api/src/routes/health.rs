use axum::Json;
use serde_json::{json, Value};

/// GET /health
/// Returns a simple status object with service version.
pub async fn health_handler() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "service": "pathconnect-api"
    }))
}

/// GET /test
/// Liveness probe used by the front end during development.
pub async fn test_handler() -> Json<Value> {
    Json(json!({ "message": "Backend is working!" }))
}

/// POST /test
/// Echoes the JSON body back; a missing or non-JSON body echoes as `{}`.
pub async fn test_echo_handler(body: Option<Json<Value>>) -> Json<Value> {
    let data = body.map(|Json(v)| v).unwrap_or_else(|| json!({}));
    Json(json!({
        "message": "POST request received!",
        "data": data
    }))
}
