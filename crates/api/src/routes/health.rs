//! Health check endpoint handlers.

use axum::{extract::State, http::StatusCode, Json};
use serde::Serialize;

use crate::app::AppState;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub database: DatabaseHealth,
}

#[derive(Debug, Serialize)]
pub struct DatabaseHealth {
    pub connected: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latency_ms: Option<u64>,
}

/// Body of the liveness/readiness probes.
#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub status: &'static str,
}

/// `GET /api/health`: database round-trip with latency.
///
/// Returns 503 with the same body shape when the database is unreachable.
pub async fn health_check(State(state): State<AppState>) -> (StatusCode, Json<HealthResponse>) {
    let (status, database) = match persistence::db::ping(&state.pool).await {
        Ok(latency) => (
            StatusCode::OK,
            DatabaseHealth {
                connected: true,
                latency_ms: Some(latency.as_millis() as u64),
            },
        ),
        Err(e) => {
            tracing::error!(error = %e, "Database health check failed");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                DatabaseHealth {
                    connected: false,
                    latency_ms: None,
                },
            )
        }
    };

    (status, Json(build_health(database)))
}

fn build_health(database: DatabaseHealth) -> HealthResponse {
    HealthResponse {
        status: if database.connected { "healthy" } else { "unhealthy" },
        version: env!("CARGO_PKG_VERSION"),
        database,
    }
}

/// `GET /api/health/live`: the process is running.
pub async fn live() -> Json<StatusResponse> {
    Json(StatusResponse { status: "alive" })
}

/// `GET /api/health/ready`: the database accepts queries.
pub async fn ready(State(state): State<AppState>) -> Result<Json<StatusResponse>, StatusCode> {
    persistence::db::ping(&state.pool)
        .await
        .map(|_| Json(StatusResponse { status: "ready" }))
        .map_err(|_| StatusCode::SERVICE_UNAVAILABLE)
}
