//! Architectural state arenas.

/// General-purpose register file.
pub mod gpr;
/// Word-addressable data memory.
pub mod mem;

pub use gpr::Gpr;
pub use mem::DataMemory;
