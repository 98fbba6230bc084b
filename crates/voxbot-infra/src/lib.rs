//! Infrastructure layer for Voxbot.
//!
//! Contains implementations of the provider traits defined in `voxbot-core`
//! (OpenAI-compatible completions, ElevenLabs speech), environment credential
//! loading, and `config.toml` loading.

pub mod config;
pub mod llm;
pub mod secret;
pub mod speech;
