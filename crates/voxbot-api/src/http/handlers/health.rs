//! GET /health -- liveness plus which provider credentials are configured.

use axum::Json;
use axum::extract::State;
use serde::Serialize;

use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct HealthReport {
    pub status: &'static str,
    pub elevenlabs: &'static str,
    pub openai: &'static str,
}

fn connection_label(configured: bool) -> &'static str {
    if configured { "connected" } else { "not configured" }
}

pub async fn health(State(state): State<AppState>) -> Json<HealthReport> {
    Json(HealthReport {
        status: "healthy",
        elevenlabs: connection_label(state.speech_configured),
        openai: connection_label(state.completion_configured),
    })
}
