//! Instruction subset definitions.
//!
//! Covers decoding for the interpretable subset: register-register
//! arithmetic/logic, immediate arithmetic, loads, stores, and branches.
//! Anything outside the subset decodes to zeroed fields and behaves as an
//! inert instruction — decoding never fails.

/// Instruction decoding with per-format immediate extraction.
pub mod decode;
/// funct3 values for the supported subset.
pub mod funct3;
/// funct7 values (alternate-encoding bit).
pub mod funct7;
/// Field masks, the `InstructionBits` extraction trait, and `Decoded`.
pub mod instruction;
/// Major opcodes (bits 6-0) for the supported subset.
pub mod opcodes;
