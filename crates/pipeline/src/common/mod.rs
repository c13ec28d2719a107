//! Common types and constants shared across the crate.

/// Architectural constants (no-op word, arena sizes, stage fill latencies).
pub mod constants;
/// Trace reconstruction errors.
pub mod error;

pub use error::TraceError;
