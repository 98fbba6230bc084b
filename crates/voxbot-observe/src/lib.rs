//! Observability setup for Voxbot: structured logging with optional
//! OpenTelemetry span export.

pub mod tracing_setup;
