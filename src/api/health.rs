//! Health endpoints

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde::Serialize;
use tracing::debug;

use crate::api::state::AppState;
use crate::api::types::{ApiError, Json};

/// Liveness response
#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: String,
}

/// GET /health - returns 200 while the service is running
pub async fn health_check() -> impl IntoResponse {
    let response = HealthResponse {
        status: "healthy",
        version: env!("CARGO_PKG_VERSION").to_string(),
    };

    (StatusCode::OK, Json(response))
}

/// GET /test-actuator/health-status
///
/// Forwards to the configured upstream health endpoint and returns the
/// upstream body verbatim. Pure pass-through, no interpretation of the
/// payload.
pub async fn actuator_health_status(State(state): State<AppState>) -> Result<String, ApiError> {
    debug!(url = %state.actuator_health_url, "Forwarding health-status request");

    let response = state
        .http_client
        .get(&state.actuator_health_url)
        .send()
        .await
        .map_err(|e| ApiError::internal(format!("Upstream health check failed: {}", e)))?;

    response
        .text()
        .await
        .map_err(|e| ApiError::internal(format!("Failed to read upstream response: {}", e)))
}
