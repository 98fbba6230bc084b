//! Environment variable credentials.
//!
//! Provider API keys are read once at startup:
//! - `OPENAI_API_KEY` for the completion provider
//! - `ELEVENLABS_API_KEY` for the speech provider
//!
//! A missing, empty or non-Unicode variable means "not configured". That is
//! never an error: the affected provider is simply left out.

use secrecy::SecretString;

/// Env var holding the completion provider key.
pub const OPENAI_API_KEY: &str = "OPENAI_API_KEY";

/// Env var holding the speech provider key.
pub const ELEVENLABS_API_KEY: &str = "ELEVENLABS_API_KEY";

/// Resolved provider credentials.
///
/// Debug output of `SecretString` is redacted.
#[derive(Debug, Clone, Default)]
pub struct ProviderCredentials {
    pub openai: Option<SecretString>,
    pub elevenlabs: Option<SecretString>,
}

impl ProviderCredentials {
    /// Read credentials from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read credentials through an arbitrary lookup function.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            openai: non_empty(lookup(OPENAI_API_KEY)),
            elevenlabs: non_empty(lookup(ELEVENLABS_API_KEY)),
        }
    }
}

fn non_empty(value: Option<String>) -> Option<SecretString> {
    value
        .filter(|v| !v.trim().is_empty())
        .map(SecretString::from)
}
