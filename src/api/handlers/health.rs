//! Health/status endpoint handler

use axum::{extract::State, http::StatusCode, Json};
use serde_json::json;

use crate::api::routes::AppState;

/// Root status document with component availability
///
/// GET /
pub async fn status(
    State(app_state): State<AppState>,
) -> (StatusCode, Json<serde_json::Value>) {
    let (code, status, database) = match app_state.db.health_check().await {
        Ok(()) => (StatusCode::OK, "ok", "connected"),
        Err(_) => (StatusCode::SERVICE_UNAVAILABLE, "error", "error"),
    };

    let body = json!({
        "message": "Task Chat is running",
        "status": status,
        "version": crate::version(),
        "components": {
            "api": "available",
            "database": database,
            "agent": "ready"
        }
    });
    (code, Json(body))
}
