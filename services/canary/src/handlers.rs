use axum::{Json, extract::State};
use chrono::{SecondsFormat, Utc};
use serde::Serialize;

use crate::config::Variant;
use crate::state::AppState;

pub const GREETING: &str = "Hello from CI/CD + Nomad!";

// ── GET /health ──────────────────────────────────────────────────────────────

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
}

pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    let timestamp = (state.variant == Variant::Full)
        .then(|| Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true));
    Json(HealthResponse {
        status: "ok",
        timestamp,
    })
}

// ── GET /ready ───────────────────────────────────────────────────────────────

#[derive(Serialize)]
pub struct ReadyResponse {
    pub ready: bool,
}

pub async fn ready() -> Json<ReadyResponse> {
    Json(ReadyResponse { ready: true })
}

// ── GET / ────────────────────────────────────────────────────────────────────

pub async fn root(State(state): State<AppState>) -> String {
    match state.variant {
        Variant::Full => format!("{GREETING} Version: {}", state.version),
        Variant::Minimal => GREETING.to_string(),
    }
}
