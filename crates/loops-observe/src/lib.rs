//! Observability setup for Loops: tracing subscriber and optional
//! OpenTelemetry span export.

pub mod tracing_setup;
