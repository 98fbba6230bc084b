//! Chat endpoint.
//!
//! POST /api/chat -- `{ "message": "..." }` in,
//! `{ "success": true, "text": "...", "audio": "data:audio/mpeg;base64,..." }` out.

use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use serde::Serialize;
use tracing::{Instrument, info_span, warn};

use voxbot_types::chat::ChatRequest;
use voxbot_types::error::ChatError;

use crate::http::error::AppError;
use crate::state::AppState;

/// Successful chat response body.
#[derive(Debug, Serialize)]
pub struct ChatResponse {
    pub success: bool,
    pub text: String,
    /// Synthesized audio as a data URI.
    pub audio: String,
}

/// POST /api/chat -- relay a message to the completion provider and speak the reply.
///
/// An unreadable body is reported as an unexpected failure (500), not as
/// a blank message.
pub async fn chat(
    State(state): State<AppState>,
    payload: Result<Json<ChatRequest>, JsonRejection>,
) -> Result<Json<ChatResponse>, AppError> {
    let request_id = uuid::Uuid::now_v7();
    let span = info_span!("chat_request", %request_id);

    handle_chat(state, payload).instrument(span).await
}

async fn handle_chat(
    state: AppState,
    payload: Result<Json<ChatRequest>, JsonRejection>,
) -> Result<Json<ChatResponse>, AppError> {
    let Json(request) = payload.map_err(|rejection| {
        warn!(status = %rejection.status(), "Rejected chat body");
        ChatError::Unexpected(rejection.body_text())
    })?;

    let reply = state.orchestrator.handle(request.message()).await?;

    Ok(Json(ChatResponse {
        success: true,
        text: reply.text,
        audio: reply.audio_url,
    }))
}
