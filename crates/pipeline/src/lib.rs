//! Cycle-by-cycle 5-stage RISC-V pipeline model.
//!
//! This crate models a simplified fetch/decode/execute/memory/write-back
//! pipeline for a reduced RV32 subset and exposes every cycle's internal
//! state as an immutable snapshot:
//! 1. **Core:** Pipeline latches, register file, data memory, ALU, and control signals.
//! 2. **ISA:** Decoding of the supported arithmetic/immediate/load/store subset.
//! 3. **Trace:** The snapshot schema shared by both producers, plus a parser
//!    that reconstructs the same snapshot sequence from an external
//!    hardware-level simulator's log.
//! 4. **Simulation:** Program loading, seeded runs, and the
//!    external-trace-or-software-model fallback policy.
//!
//! The model deliberately omits hazard detection, forwarding, and branch
//! redirection: stage activity is gated purely by pipeline-fill latency, so
//! a dependent instruction issued back-to-back reads a stale register value.

/// Common types and constants (no-op word, arena sizes, fill latencies, errors).
pub mod common;
/// Run configuration (cycle count, stage logging).
pub mod config;
/// Pipeline core (latches, stages, register file, memory, ALU).
pub mod core;
/// Instruction subset (decode, field extraction, opcode constants).
pub mod isa;
/// Program loading and run orchestration.
pub mod sim;
/// Snapshot schema and external trace reconstruction.
pub mod trace;

/// Run configuration; use `Config::default()` or deserialize from JSON.
pub use crate::config::Config;
/// The per-cycle state machine; one instance per run.
pub use crate::core::pipeline::engine::PipelineEngine;
/// One cycle's complete observable state.
pub use crate::trace::snapshot::CycleSnapshot;
/// Ordered, append-only sequence of cycle snapshots.
pub use crate::trace::snapshot::Trace;
