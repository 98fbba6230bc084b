//! Chat orchestration: one message in, text plus spoken audio out.

pub mod orchestrator;
