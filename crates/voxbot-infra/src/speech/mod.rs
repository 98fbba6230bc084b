//! Speech provider implementations.

pub mod elevenlabs;

use secrecy::SecretString;
use tracing::info;

use voxbot_core::speech::box_provider::BoxSpeechProvider;
use voxbot_types::config::SpeechConfig;

use self::elevenlabs::ElevenLabsProvider;

/// Build the speech provider, or `None` when no API key is configured.
pub fn create_speech_provider(
    config: &SpeechConfig,
    api_key: Option<&SecretString>,
) -> Option<BoxSpeechProvider> {
    let api_key = api_key?;
    info!(
        voice_id = %config.voice_id,
        model_id = %config.model_id,
        base_url = %config.base_url,
        "Speech provider configured"
    );
    Some(BoxSpeechProvider::new(ElevenLabsProvider::new(
        api_key.clone(),
        &config.base_url,
    )))
}
