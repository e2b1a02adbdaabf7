//! Observability setup for scriptform: structured logging and optional
//! OpenTelemetry span export.

pub mod tracing_setup;
