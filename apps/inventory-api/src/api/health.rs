//! Readiness endpoint

use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use serde::Serialize;

use crate::state::AppState;

#[derive(Serialize)]
struct ReadyResponse {
    status: &'static str,
    service: &'static str,
    version: &'static str,
}

/// Ready means the catalog document is readable right now.
async fn ready(State(state): State<AppState>) -> (StatusCode, Json<ReadyResponse>) {
    let (code, status) = match state.service.summary().await {
        Ok(_) => (StatusCode::OK, "ready"),
        Err(e) => {
            tracing::error!("Readiness probe failed: {}", e);
            (StatusCode::SERVICE_UNAVAILABLE, "not ready")
        }
    };

    (
        code,
        Json(ReadyResponse {
            status,
            service: env!("CARGO_PKG_NAME"),
            version: env!("CARGO_PKG_VERSION"),
        }),
    )
}

pub fn router(state: AppState) -> Router {
    Router::new().route("/ready", get(ready)).with_state(state)
}
