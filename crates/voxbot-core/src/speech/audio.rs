//! Audio buffering and encoding.
//!
//! Providers hand back audio as a chunk stream. Downstream code needs one
//! contiguous buffer, so [`drain_audio`] collects the stream with a hard size
//! cap, and [`audio_data_uri`] turns the buffer into an inline `data:` URI.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use futures_util::StreamExt;

use voxbot_types::speech::SpeechError;

use super::provider::AudioStream;

/// MIME type of the synthesized audio.
pub const AUDIO_MIME: &str = "audio/mpeg";

/// Collect every chunk of `stream` into one buffer.
///
/// Fails on the first chunk error, when the total grows past `max_bytes`,
/// or when the provider produced no bytes at all. A partial buffer is never
/// returned.
pub async fn drain_audio(mut stream: AudioStream, max_bytes: usize) -> Result<Vec<u8>, SpeechError> {
    let mut buffer = Vec::new();

    while let Some(chunk) = stream.next().await {
        let chunk = chunk?;
        if buffer.len() + chunk.len() > max_bytes {
            return Err(SpeechError::TooLarge { limit: max_bytes });
        }
        buffer.extend_from_slice(&chunk);
    }

    if buffer.is_empty() {
        return Err(SpeechError::EmptyAudio);
    }

    Ok(buffer)
}

/// Encode audio bytes as `data:audio/mpeg;base64,<payload>`.
pub fn audio_data_uri(audio: &[u8]) -> String {
    format!("data:{AUDIO_MIME};base64,{}", STANDARD.encode(audio))
}
