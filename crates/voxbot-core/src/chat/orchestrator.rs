//! Chat orchestrator.
//!
//! Drives one chat call through the two providers, strictly in sequence:
//! validate -> completion -> synthesis -> encode.
//!
//! Completion failures are masked with fixed fallback text so the caller
//! always gets spoken feedback. Synthesis failures are fatal: a successful
//! reply always carries real audio.

use std::sync::Arc;

use tracing::{Instrument, error, info, info_span, warn};

use voxbot_types::chat::{ChatReply, TextSource};
use voxbot_types::config::{CompletionConfig, ReplyConfig, SpeechConfig, VoxbotConfig};
use voxbot_types::error::ChatError;
use voxbot_types::llm::{CompletionRequest, Message};
use voxbot_types::speech::SpeechRequest;

use crate::llm::box_provider::BoxLlmProvider;
use crate::speech::audio::{audio_data_uri, drain_audio};
use crate::speech::box_provider::BoxSpeechProvider;

/// Relays a message to the completion provider and speaks the answer.
///
/// Either provider may be absent (no credential configured). Holds no
/// per-request state, so one instance serves all concurrent requests.
pub struct ChatOrchestrator {
    completion: Option<Arc<BoxLlmProvider>>,
    speech: Option<Arc<BoxSpeechProvider>>,
    completion_config: CompletionConfig,
    speech_config: SpeechConfig,
    replies: ReplyConfig,
}

impl ChatOrchestrator {
    pub fn new(
        completion: Option<Arc<BoxLlmProvider>>,
        speech: Option<Arc<BoxSpeechProvider>>,
        config: &VoxbotConfig,
    ) -> Self {
        Self {
            completion,
            speech,
            completion_config: config.completion.clone(),
            speech_config: config.speech.clone(),
            replies: config.replies.clone(),
        }
    }

    /// Handle one raw chat message.
    ///
    /// Blank input fails with [`ChatError::InvalidInput`] before any provider
    /// is called.
    pub async fn handle(&self, raw_message: &str) -> Result<ChatReply, ChatError> {
        let message = raw_message.trim();
        if message.is_empty() {
            info!(raw_chars = raw_message.chars().count(), "Rejecting blank chat message");
            return Err(ChatError::InvalidInput(self.replies.blank_message.clone()));
        }

        let (text, text_source) = self.obtain_text(message).await;
        let audio = self.synthesize(&text).await?;

        info!(
            text_source = %text_source,
            text_chars = text.chars().count(),
            audio_bytes = audio.len(),
            "Chat reply ready"
        );

        Ok(ChatReply {
            audio_url: audio_data_uri(&audio),
            text,
            text_source,
        })
    }

    /// Build the completion request for a trimmed user message.
    pub fn build_completion_request(&self, message: &str) -> CompletionRequest {
        CompletionRequest {
            model: self.completion_config.model.clone(),
            messages: vec![Message::user(message)],
            system: Some(self.completion_config.system_prompt.clone()),
            max_tokens: self.completion_config.max_tokens,
            temperature: Some(self.completion_config.temperature),
        }
    }

    /// Get reply text from the completion provider, falling back to fixed
    /// texts when it is unconfigured, fails, or answers with nothing.
    async fn obtain_text(&self, message: &str) -> (String, TextSource) {
        let Some(provider) = &self.completion else {
            warn!("Completion provider not configured, using fallback text");
            return (
                self.replies.completion_unconfigured.clone(),
                TextSource::Unconfigured,
            );
        };

        let request = self.build_completion_request(message);
        let span = info_span!(
            "gen_ai.complete",
            gen_ai.system = provider.name(),
            gen_ai.request.model = %request.model,
            gen_ai.request.max_tokens = request.max_tokens,
            gen_ai.request.temperature = ?request.temperature,
        );

        match provider.complete(&request).instrument(span).await {
            Ok(response) => {
                let text = response.content.trim();
                if text.is_empty() {
                    warn!(provider = provider.name(), "Completion returned empty text");
                    (self.replies.completion_failed.clone(), TextSource::Apology)
                } else {
                    (text.to_string(), TextSource::Generated)
                }
            }
            Err(e) => {
                warn!(provider = provider.name(), error = %e, "Completion failed, using apology text");
                (self.replies.completion_failed.clone(), TextSource::Apology)
            }
        }
    }

    /// Render `text` and drain the provider's stream into one buffer.
    async fn synthesize(&self, text: &str) -> Result<Vec<u8>, ChatError> {
        let Some(provider) = &self.speech else {
            error!("Speech provider not configured");
            return Err(ChatError::SynthesisUnavailable(
                self.replies.speech_unconfigured.clone(),
            ));
        };

        let request = SpeechRequest {
            text: text.to_string(),
            voice_id: self.speech_config.voice_id.clone(),
            model_id: self.speech_config.model_id.clone(),
        };
        let span = info_span!(
            "speech.synthesize",
            speech.system = provider.name(),
            speech.voice_id = %request.voice_id,
            speech.model_id = %request.model_id,
        );

        let stream = provider.synthesize(request);
        drain_audio(stream, self.speech_config.max_audio_bytes)
            .instrument(span)
            .await
            .map_err(|e| {
                error!(provider = provider.name(), error = %e, "Speech synthesis failed");
                ChatError::SynthesisFailed(e.to_string())
            })
    }
}
