//! Chat request/reply value objects.
//!
//! One `ChatRequest` comes in per call and one `ChatReply` (or `ChatError`)
//! goes out. Nothing here outlives the request.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Incoming chat call. A missing or null `message` is treated as blank.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ChatRequest {
    #[serde(default)]
    pub message: Option<String>,
}

impl ChatRequest {
    pub fn message(&self) -> &str {
        self.message.as_deref().unwrap_or_default()
    }
}

/// Where the reply text came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TextSource {
    /// Produced by the completion provider.
    Generated,
    /// No completion credential; fixed fallback text.
    Unconfigured,
    /// Completion call failed; fixed apology text.
    Apology,
}

impl fmt::Display for TextSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TextSource::Generated => write!(f, "generated"),
            TextSource::Unconfigured => write!(f, "unconfigured"),
            TextSource::Apology => write!(f, "apology"),
        }
    }
}

/// Successful outcome of one chat call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatReply {
    /// Text that was spoken.
    pub text: String,
    /// `data:audio/mpeg;base64,...` URI holding the synthesized audio.
    pub audio_url: String,
    pub text_source: TextSource,
}
