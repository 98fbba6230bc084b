//! BoxSpeechProvider -- object-safe dynamic dispatch wrapper for SpeechProvider.
//!
//! Same blanket-impl pattern as [`crate::llm::box_provider`].

use std::future::Future;
use std::pin::Pin;

use voxbot_types::speech::{SpeechError, SpeechRequest, Voice};

use super::provider::{AudioStream, SpeechProvider};

/// Object-safe version of [`SpeechProvider`] with boxed futures.
pub trait SpeechProviderDyn: Send + Sync {
    fn name(&self) -> &str;

    fn synthesize_boxed(&self, request: SpeechRequest) -> AudioStream;

    fn list_voices_boxed<'a>(
        &'a self,
    ) -> Pin<Box<dyn Future<Output = Result<Vec<Voice>, SpeechError>> + Send + 'a>>;
}

impl<T: SpeechProvider> SpeechProviderDyn for T {
    fn name(&self) -> &str {
        SpeechProvider::name(self)
    }

    fn synthesize_boxed(&self, request: SpeechRequest) -> AudioStream {
        self.synthesize(request)
    }

    fn list_voices_boxed<'a>(
        &'a self,
    ) -> Pin<Box<dyn Future<Output = Result<Vec<Voice>, SpeechError>> + Send + 'a>> {
        Box::pin(self.list_voices())
    }
}

/// Type-erased speech provider for runtime provider selection.
pub struct BoxSpeechProvider {
    inner: Box<dyn SpeechProviderDyn + Send + Sync>,
}

impl BoxSpeechProvider {
    /// Wrap a concrete `SpeechProvider` in a type-erased box.
    pub fn new<T: SpeechProvider + 'static>(provider: T) -> Self {
        Self {
            inner: Box::new(provider),
        }
    }

    /// Human-readable provider name.
    pub fn name(&self) -> &str {
        self.inner.name()
    }

    /// Render text to a stream of audio chunks.
    pub fn synthesize(&self, request: SpeechRequest) -> AudioStream {
        self.inner.synthesize_boxed(request)
    }

    /// List the voices available to the configured account.
    pub async fn list_voices(&self) -> Result<Vec<Voice>, SpeechError> {
        self.inner.list_voices_boxed().await
    }
}
