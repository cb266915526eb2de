//! telemetry/mod.rs
//! Per-call timings and size ratios, reported through `tracing` when
//! metrics collection is enabled. Nothing is accumulated across calls.

pub mod snapshot;
pub mod timers;

pub use snapshot::*;
pub use timers::*;
