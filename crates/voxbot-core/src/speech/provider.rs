//! SpeechProvider trait definition.

use std::pin::Pin;

use futures_util::Stream;

use voxbot_types::speech::{SpeechError, SpeechRequest, Voice};

/// Stream of audio chunks produced by one synthesis call.
pub type AudioStream = Pin<Box<dyn Stream<Item = Result<Vec<u8>, SpeechError>> + Send + 'static>>;

/// Trait for speech synthesis backends (ElevenLabs, ...).
///
/// `synthesize` returns a boxed stream so the trait stays usable behind
/// `BoxSpeechProvider`. Chunks arrive in playback order; the first `Err`
/// ends the rendering.
pub trait SpeechProvider: Send + Sync {
    /// Human-readable provider name (e.g., "elevenlabs").
    fn name(&self) -> &str;

    /// Render `request.text` with the requested voice and model.
    fn synthesize(&self, request: SpeechRequest) -> AudioStream;

    /// List the voices available to the configured account.
    fn list_voices(
        &self,
    ) -> impl std::future::Future<Output = Result<Vec<Voice>, SpeechError>> + Send;
}
