//! Shared domain types for Voxbot.
//!
//! Value objects passed between the orchestrator, the provider clients and
//! the HTTP layer: completion and speech requests, the chat reply, error
//! enums and the process configuration.
//!
//! Zero infrastructure dependencies -- only serde and thiserror.

pub mod chat;
pub mod config;
pub mod error;
pub mod llm;
pub mod speech;
