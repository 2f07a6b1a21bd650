//! Liveness endpoint, mounted outside `/api/v1`.

use axum::extract::State;
use axum::http::StatusCode;
use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct HealthReport {
    /// `ok`, or `degraded` when the database cannot be reached.
    pub status: &'static str,
    pub version: &'static str,
    /// `up` or `down`.
    pub database: &'static str,
    /// Publishing API base URL that publish and republish send to.
    pub publishing_api: String,
}

/// GET /health
///
/// Answers 503 while the database is down. The Publishing API is reported,
/// not probed.
async fn health(State(state): State<AppState>) -> (StatusCode, Json<HealthReport>) {
    let db_up = herald_db::health_check(&state.pool).await.is_ok();
    if !db_up {
        tracing::warn!("Health check could not reach the database");
    }

    let (code, status, database) = if db_up {
        (StatusCode::OK, "ok", "up")
    } else {
        (StatusCode::SERVICE_UNAVAILABLE, "degraded", "down")
    };

    let report = HealthReport {
        status,
        version: env!("CARGO_PKG_VERSION"),
        database,
        publishing_api: state.publishing.endpoint().to_string(),
    };
    (code, Json(report))
}

pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health))
}
