//! Voice listing endpoint.
//!
//! GET /api/voices -- passthrough to the speech provider's voice catalog.

use axum::Json;
use axum::extract::State;
use serde::Serialize;

use voxbot_types::speech::Voice;

use crate::http::error::AppError;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct VoicesResponse {
    pub voices: Vec<Voice>,
}

/// GET /api/voices
pub async fn list_voices(State(state): State<AppState>) -> Result<Json<VoicesResponse>, AppError> {
    let Some(provider) = &state.speech else {
        return Err(AppError::Voices(state.replies.speech_unconfigured.clone()));
    };

    let voices = provider
        .list_voices()
        .await
        .map_err(|e| AppError::Voices(e.to_string()))?;

    Ok(Json(VoicesResponse { voices }))
}
