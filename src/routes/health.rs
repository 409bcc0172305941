use axum::{Json, http::StatusCode, response::IntoResponse};
use serde_json::json;

/// GET /health - Liveness probe
/// Returns 200 OK if the process is alive
pub async fn health() -> impl IntoResponse {
    (StatusCode::OK, Json(json!({"status": "ok"})))
}

/// GET /ready - Readiness probe
///
/// The service is stateless with no backing stores, so readiness is
/// equivalent to liveness.
pub async fn ready() -> impl IntoResponse {
    (StatusCode::OK, Json(json!({"status": "ready"})))
}
