//! Health endpoint.

use axum::http::StatusCode;

/// Liveness probe: the process is up and serving.
pub async fn health_check() -> StatusCode {
    StatusCode::OK
}
