//! Application state wiring providers and the orchestrator together.
//!
//! Providers are built once from config and credentials, then shared by all
//! requests through `Arc`. A provider without a credential is `None`.

use std::sync::Arc;

use voxbot_core::chat::orchestrator::ChatOrchestrator;
use voxbot_core::llm::box_provider::BoxLlmProvider;
use voxbot_core::speech::box_provider::BoxSpeechProvider;
use voxbot_infra::llm::create_completion_provider;
use voxbot_infra::secret::ProviderCredentials;
use voxbot_infra::speech::create_speech_provider;
use voxbot_types::config::{ReplyConfig, VoxbotConfig};

/// Shared application state handed to every HTTP handler.
#[derive(Clone)]
pub struct AppState {
    pub orchestrator: Arc<ChatOrchestrator>,
    /// Speech provider, also used directly for the voice listing.
    pub speech: Option<Arc<BoxSpeechProvider>>,
    pub replies: Arc<ReplyConfig>,
    pub completion_configured: bool,
    pub speech_configured: bool,
}

impl AppState {
    /// Build concrete providers from config and credentials.
    pub fn init(config: &VoxbotConfig, credentials: &ProviderCredentials) -> Self {
        let completion =
            create_completion_provider(&config.completion, credentials.openai.as_ref());
        let speech = create_speech_provider(&config.speech, credentials.elevenlabs.as_ref());
        Self::from_providers(config, completion, speech)
    }

    /// Wire already-constructed providers (real or test doubles).
    pub fn from_providers(
        config: &VoxbotConfig,
        completion: Option<BoxLlmProvider>,
        speech: Option<BoxSpeechProvider>,
    ) -> Self {
        let completion = completion.map(Arc::new);
        let speech = speech.map(Arc::new);

        Self {
            completion_configured: completion.is_some(),
            speech_configured: speech.is_some(),
            orchestrator: Arc::new(ChatOrchestrator::new(completion, speech.clone(), config)),
            speech,
            replies: Arc::new(config.replies.clone()),
        }
    }
}
