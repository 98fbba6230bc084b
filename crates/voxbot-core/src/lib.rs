//! Provider ports and chat orchestration for Voxbot.
//!
//! This crate defines the "ports" (provider traits) that the infrastructure
//! layer implements, and the orchestrator that drives them. It depends only
//! on `voxbot-types` -- never on `voxbot-infra` or any HTTP client crate.

pub mod chat;
pub mod llm;
pub mod speech;
