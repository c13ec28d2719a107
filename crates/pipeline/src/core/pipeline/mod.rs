//! The 5-stage pipeline.
//!
//! Organized the way the hardware is: latch structures between stages,
//! control signals generated at decode, one module per stage, and an
//! engine that owns all state and advances it one cycle at a time.

/// The per-cycle state machine.
pub mod engine;
/// Pipeline latch structures for inter-stage communication.
pub mod latches;
/// Control signals derived from the decoded opcode.
pub mod signals;
/// The five pipeline stages.
pub mod stages;
