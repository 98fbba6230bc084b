//! Speech synthesis types for Voxbot.

use serde::{Deserialize, Serialize};

/// Request to a speech provider for one audio rendering of `text`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpeechRequest {
    pub text: String,
    pub voice_id: String,
    pub model_id: String,
}

/// A voice offered by a speech provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Voice {
    pub name: String,
    pub voice_id: String,
}

/// Errors from speech provider operations.
#[derive(Debug, thiserror::Error)]
pub enum SpeechError {
    #[error("speech provider returned {status}: {message}")]
    Provider { status: u16, message: String },

    #[error("authentication failed: {0}")]
    AuthenticationFailed(String),

    #[error("http error: {0}")]
    Http(String),

    #[error("audio stream error: {0}")]
    Stream(String),

    #[error("deserialization error: {0}")]
    Deserialization(String),

    #[error("audio exceeds {limit} bytes")]
    TooLarge { limit: usize },

    #[error("speech provider returned no audio")]
    EmptyAudio,
}
