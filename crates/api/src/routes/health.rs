//! Liveness and readiness probes.

use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use chrono::{SecondsFormat, Utc};
use order_store::OrderStore;
use serde::Serialize;

use crate::state::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub service: String,
    pub timestamp: String,
    pub uptime: f64,
}

#[derive(Serialize)]
pub struct ReadyResponse {
    pub status: &'static str,
    pub service: String,
}

/// GET /health: always healthy while the process can serve requests.
pub async fn check<S: OrderStore + 'static>(
    State(state): State<Arc<AppState<S>>>,
) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        service: state.service_name.clone(),
        timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true),
        uptime: state.uptime_seconds(),
    })
}

/// GET /ready: the in-memory store needs no warm-up, so this never fails.
pub async fn ready<S: OrderStore + 'static>(
    State(state): State<Arc<AppState<S>>>,
) -> Json<ReadyResponse> {
    Json(ReadyResponse {
        status: "ready",
        service: state.service_name.clone(),
    })
}
