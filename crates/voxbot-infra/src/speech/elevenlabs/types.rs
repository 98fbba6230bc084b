//! ElevenLabs wire types.

use serde::{Deserialize, Serialize};

use voxbot_types::speech::Voice;

/// Body of `POST /v1/text-to-speech/{voice_id}`.
#[derive(Debug, Serialize)]
pub struct TextToSpeechBody<'a> {
    pub text: &'a str,
    pub model_id: &'a str,
}

/// Response of `GET /v1/voices`. Unknown fields are ignored.
#[derive(Debug, Deserialize)]
pub struct VoicesResponse {
    #[serde(default)]
    pub voices: Vec<VoiceEntry>,
}

#[derive(Debug, Deserialize)]
pub struct VoiceEntry {
    pub voice_id: String,
    #[serde(default)]
    pub name: Option<String>,
}

impl From<VoiceEntry> for Voice {
    fn from(entry: VoiceEntry) -> Self {
        Voice {
            name: entry.name.unwrap_or_default(),
            voice_id: entry.voice_id,
        }
    }
}

/// Error body. `detail` is either a string or an object with a `message`.
#[derive(Debug, Deserialize)]
pub struct ErrorResponse {
    pub detail: ErrorDetail,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum ErrorDetail {
    Structured { message: String },
    Text(String),
}

impl ErrorDetail {
    pub fn message(&self) -> &str {
        match self {
            ErrorDetail::Structured { message } => message,
            ErrorDetail::Text(text) => text,
        }
    }
}
