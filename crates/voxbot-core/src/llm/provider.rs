//! LlmProvider trait definition.

use voxbot_types::llm::{CompletionRequest, CompletionResponse, LlmError};

/// Trait for completion provider backends (OpenAI and compatibles).
///
/// Uses native async fn in traits (RPITIT, Rust 2024 edition). Wrap an
/// implementation in [`super::box_provider::BoxLlmProvider`] to select it
/// at runtime.
///
/// Implementations live in voxbot-infra (e.g., `OpenAiCompatibleProvider`).
pub trait LlmProvider: Send + Sync {
    /// Human-readable provider name (e.g., "openai").
    fn name(&self) -> &str;

    /// Send a completion request and receive the full response.
    fn complete(
        &self,
        request: &CompletionRequest,
    ) -> impl std::future::Future<Output = Result<CompletionResponse, LlmError>> + Send;
}
