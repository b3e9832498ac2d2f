//! Liveness plus storage reachability
//!
//! `GET /health` pings the user store: 200 when it answers, 503 when it
//! does not.

use std::sync::Arc;

use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use serde::{Deserialize, Serialize};

use crate::http::server::AppState;

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub storage: String,
    pub version: String,
}

/// GET /health
async fn health(State(state): State<Arc<AppState>>) -> (StatusCode, Json<HealthResponse>) {
    let (status, storage, code) = match state.users.ping().await {
        Ok(()) => ("ok", "reachable", StatusCode::OK),
        Err(e) => {
            tracing::warn!("Storage ping failed: {}", e);
            ("degraded", "unreachable", StatusCode::SERVICE_UNAVAILABLE)
        }
    };

    (
        code,
        Json(HealthResponse {
            status: status.to_owned(),
            storage: storage.to_owned(),
            version: env!("CARGO_PKG_VERSION").to_owned(),
        }),
    )
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/health", get(health))
}
