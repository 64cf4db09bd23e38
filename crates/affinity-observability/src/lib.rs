//! # affinity-observability
//!
//! Tracing subscriber setup and the spans emitted by the breakdown pipeline.

pub mod tracing_setup;

pub use tracing_setup::init_tracing;
