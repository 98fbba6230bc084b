//! Completion provider implementations.
//!
//! Also provides the factory ([`create_completion_provider`]) that builds the
//! provider from configuration and the (optional) resolved credential.

pub mod openai_compat;

use secrecy::SecretString;
use tracing::info;

use voxbot_core::llm::box_provider::BoxLlmProvider;
use voxbot_types::config::CompletionConfig;

use self::openai_compat::OpenAiCompatibleProvider;
use self::openai_compat::config::openai_defaults;

/// Build the completion provider, or `None` when no API key is configured.
pub fn create_completion_provider(
    config: &CompletionConfig,
    api_key: Option<&SecretString>,
) -> Option<BoxLlmProvider> {
    let api_key = api_key?;

    let mut oai_config = openai_defaults(api_key.clone());
    oai_config.base_url = config.base_url.clone();
    let provider = OpenAiCompatibleProvider::new(oai_config);
    info!(model = %config.model, base_url = %config.base_url, "Completion provider configured");

    Some(BoxLlmProvider::new(provider))
}
