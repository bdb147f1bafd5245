//! Health check handler.

use axum::{extract::State, Json};

use crate::state::AppState;
use crate::types::HealthResponse;

/// GET /api/health - Health check endpoint.
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime_seconds: state.config.uptime_seconds(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ApiConfig;
    use tempfile::tempdir;

    #[tokio::test]
    async fn test_health_reports_status_and_version() {
        // Health never writes, so the state dir can drop with the test
        let dir = tempdir().unwrap();
        let state = AppState::open(ApiConfig::default(), dir.path()).unwrap();

        let response = health(State(state)).await;

        assert_eq!(response.status, "ok");
        assert_eq!(response.version, env!("CARGO_PKG_VERSION"));
        // Uptime counts from config creation moments ago
        assert!(response.uptime_seconds < 60);
    }
}
