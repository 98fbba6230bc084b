use thiserror::Error;

/// Errors surfaced by the chat orchestrator.
///
/// Completion failures never appear here: they are recovered with fallback
/// text and recorded as a [`crate::chat::TextSource`].
#[derive(Debug, Error)]
pub enum ChatError {
    /// The message was blank after trimming.
    #[error("{0}")]
    InvalidInput(String),

    /// No speech credential is configured.
    #[error("{0}")]
    SynthesisUnavailable(String),

    /// The speech provider failed or returned unusable audio.
    #[error("{0}")]
    SynthesisFailed(String),

    /// Any other fault while handling the request.
    #[error("{0}")]
    Unexpected(String),
}

impl ChatError {
    /// Whether the caller can fix this by changing the request.
    pub fn is_client_error(&self) -> bool {
        matches!(self, ChatError::InvalidInput(_))
    }
}
