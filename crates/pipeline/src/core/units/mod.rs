//! Functional units.

/// Arithmetic Logic Unit.
pub mod alu;

pub use alu::Alu;
