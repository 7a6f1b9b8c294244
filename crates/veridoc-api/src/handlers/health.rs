//! Health check handler.

use std::sync::Arc;
use std::time::Duration;

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use veridoc_storage::Storage;

use crate::state::AppState;

/// Liveness plus a storage probe. The registry is in-process, so storage is
/// the only dependency worth checking.
pub async fn health_check(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    const TIMEOUT: Duration = Duration::from_secs(5);

    let storage_status = match tokio::time::timeout(
        TIMEOUT,
        state.storage.exists("health-check-non-existent-key"),
    )
    .await
    {
        Ok(Ok(_)) => "healthy".to_string(),
        Ok(Err(e)) => {
            tracing::error!(error = %e, "Storage health check failed");
            format!("unhealthy: {}", e)
        }
        Err(_) => {
            tracing::error!("Storage health check timed out");
            "timeout".to_string()
        }
    };

    let overall_healthy = storage_status == "healthy";
    let status_code = if overall_healthy {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    (
        status_code,
        Json(serde_json::json!({
            "status": if overall_healthy { "healthy" } else { "unhealthy" },
            "storage": storage_status,
        })),
    )
}
