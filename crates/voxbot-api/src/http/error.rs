//! Application error type mapping to HTTP status codes and JSON bodies.
//!
//! Body shapes:
//! - blank message: `400 { "error": ... }`
//! - chat failures: `500 { "success": false, "error": ... }`
//! - voice listing failures: `500 { "error": ... }`

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

use voxbot_types::error::ChatError;

/// Application-level error that maps to HTTP responses.
#[derive(Debug)]
pub enum AppError {
    /// Chat orchestration errors.
    Chat(ChatError),
    /// Voice listing failed or speech is not configured.
    Voices(String),
}

impl From<ChatError> for AppError {
    fn from(e: ChatError) -> Self {
        AppError::Chat(e)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            AppError::Chat(e) if e.is_client_error() => {
                tracing::info!(error = %e, "Chat request rejected");
                (StatusCode::BAD_REQUEST, json!({ "error": e.to_string() }))
            }
            AppError::Chat(e) => {
                tracing::error!(error = ?e, "Chat request failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({ "success": false, "error": e.to_string() }),
                )
            }
            AppError::Voices(msg) => {
                tracing::error!(error = %msg, "Voice listing failed");
                (StatusCode::INTERNAL_SERVER_ERROR, json!({ "error": msg }))
            }
        };

        (status, Json(body)).into_response()
    }
}
