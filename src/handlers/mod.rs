pub mod products;

use axum::{http::StatusCode, Json};
use serde_json::json;

/// GET /health — static liveness probe, no dependency checks.
pub async fn health() -> (StatusCode, Json<serde_json::Value>) {
    (
        StatusCode::OK,
        Json(json!({ "success": true, "message": "Server is running" })),
    )
}

/// Catch-all for unmatched routes. Always 200 with `success:false`.
pub async fn invalid_api() -> (StatusCode, Json<serde_json::Value>) {
    (
        StatusCode::OK,
        Json(json!({ "success": false, "message": "Invalid API" })),
    )
}
