//! Process configuration types for Voxbot.
//!
//! `VoxbotConfig` is the optional `config.toml` read once at startup. Every
//! field has a default, so an empty or missing file yields a working setup.
//! Values are fixed for the lifetime of the process.

use serde::{Deserialize, Serialize};

/// Top-level configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct VoxbotConfig {
    #[serde(default)]
    pub completion: CompletionConfig,
    #[serde(default)]
    pub speech: SpeechConfig,
    #[serde(default)]
    pub replies: ReplyConfig,
}

/// Settings for the completion provider call.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CompletionConfig {
    /// Model identifier sent to the provider.
    pub model: String,
    /// Upper bound on generated tokens.
    pub max_tokens: u32,
    /// Sampling temperature.
    pub temperature: f64,
    /// Fixed system instruction prepended to every call.
    pub system_prompt: String,
    /// Base URL of the OpenAI-compatible API.
    pub base_url: String,
}

impl Default for CompletionConfig {
    fn default() -> Self {
        Self {
            model: "gpt-3.5-turbo".to_string(),
            max_tokens: 150,
            temperature: 0.7,
            system_prompt: "Sen yardımcı ve samimi bir Türkçe AI asistanısın. \
                Kısa ve net yanıtlar ver."
                .to_string(),
            base_url: "https://api.openai.com/v1".to_string(),
        }
    }
}

/// Settings for the speech synthesis call.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SpeechConfig {
    /// Voice used for every rendering ("Rachel" by default).
    pub voice_id: String,
    /// Synthesis model identifier.
    pub model_id: String,
    /// Base URL of the ElevenLabs API.
    pub base_url: String,
    /// Largest audio payload accepted from the provider.
    pub max_audio_bytes: usize,
}

impl Default for SpeechConfig {
    fn default() -> Self {
        Self {
            voice_id: "21m00Tcm4TlvDq8ikWAM".to_string(),
            model_id: "eleven_monolingual_v1".to_string(),
            base_url: "https://api.elevenlabs.io".to_string(),
            max_audio_bytes: 10 * 1024 * 1024,
        }
    }
}

/// Fixed user-facing texts.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ReplyConfig {
    /// Error returned for a blank message.
    pub blank_message: String,
    /// Spoken when no completion credential is configured.
    pub completion_unconfigured: String,
    /// Spoken when the completion call fails.
    pub completion_failed: String,
    /// Error returned when no speech credential is configured.
    pub speech_unconfigured: String,
}

impl Default for ReplyConfig {
    fn default() -> Self {
        Self {
            blank_message: "Mesaj boş olamaz".to_string(),
            completion_unconfigured: "OpenAI API anahtarı yapılandırılmamış.".to_string(),
            completion_failed: "Üzgünüm, şu anda yanıt üretemiyorum. Lütfen tekrar deneyin."
                .to_string(),
            speech_unconfigured: "ElevenLabs API anahtarı yapılandırılmamış".to_string(),
        }
    }
}
