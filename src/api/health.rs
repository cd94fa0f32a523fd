//! Health check endpoints

use axum::{extract::State, http::StatusCode, response::IntoResponse};
use serde::Serialize;

use super::state::AppState;
use crate::api::types::Json;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub issued_keys: usize,
}

/// Report service status and the number of issued API keys
pub async fn health_check(State(state): State<AppState>) -> impl IntoResponse {
    let response = HealthResponse {
        status: "healthy",
        version: env!("CARGO_PKG_VERSION"),
        issued_keys: state.registrar.issued_key_count().await,
    };

    (StatusCode::OK, Json(response))
}

/// Liveness probe
pub async fn live_check() -> StatusCode {
    StatusCode::OK
}
