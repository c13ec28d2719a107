//! Snapshot schema and external trace reconstruction.
//!
//! The snapshot sequence is the contract between this crate and any
//! consumer: the software engine produces it directly, and
//! [`parser::TraceParser`] reconstructs the identical sequence from the
//! line-oriented log of an external hardware-level simulator.

/// Reconstruction of snapshots from an external simulator log.
pub mod parser;
/// The per-cycle snapshot record and the append-only trace.
pub mod snapshot;

pub use parser::TraceParser;
pub use snapshot::{CycleSnapshot, Trace};
