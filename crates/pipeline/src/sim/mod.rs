//! Program loading and run orchestration.
//!
//! This is the front door for producing a trace: [`loader::load_program`]
//! turns hex text into instruction memory, and [`simulator`] decides
//! between reconstructing an external simulator's log and running the
//! software pipeline model.

/// Hex program text to instruction memory.
pub mod loader;
/// Run orchestration and the external-trace fallback policy.
pub mod simulator;

pub use loader::load_program;
pub use simulator::{resolve_trace, run_software, trace_from_external_log};
