//! Pipeline core (architectural state, functional units, stage machinery).

/// Architectural state (register file, data memory).
pub mod arch;
/// The 5-stage pipeline (latches, control signals, stages, engine).
pub mod pipeline;
/// Functional units (ALU).
pub mod units;
