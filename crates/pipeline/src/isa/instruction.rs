//! Instruction encoding and decoding utilities.
//!
//! Provides bit extraction functions and structures for decoding
//! instruction fields from 32-bit RISC-V encodings.

use serde::Serialize;

use crate::isa::opcodes;

/// Bit mask for extracting the opcode field (bits 0-6).
pub const OPCODE_MASK: u32 = 0x7F;
/// Bit mask for extracting the destination register field (bits 7-11).
pub const RD_MASK: u32 = 0x1F;
/// Bit mask for extracting the first source register field (bits 15-19).
pub const RS1_MASK: u32 = 0x1F;
/// Bit mask for extracting the second source register field (bits 20-24).
pub const RS2_MASK: u32 = 0x1F;
/// Bit mask for extracting the funct3 field (bits 12-14).
pub const FUNCT3_MASK: u32 = 0x7;
/// Bit mask for extracting the funct7 field (bits 25-31).
pub const FUNCT7_MASK: u32 = 0x7F;

/// Trait for extracting instruction fields from encoded instructions.
///
/// Implemented on `u32` so raw words can be queried directly without an
/// intermediate structure.
pub trait InstructionBits {
    /// Extracts the opcode field (bits 0-6).
    fn opcode(&self) -> u32;

    /// Extracts the destination register field (bits 7-11).
    fn rd(&self) -> usize;

    /// Extracts the first source register field (bits 15-19).
    fn rs1(&self) -> usize;

    /// Extracts the second source register field (bits 20-24).
    fn rs2(&self) -> usize;

    /// Extracts the funct3 field (bits 12-14).
    fn funct3(&self) -> u32;

    /// Extracts the funct7 field (bits 25-31).
    fn funct7(&self) -> u32;
}

impl InstructionBits for u32 {
    #[inline(always)]
    fn opcode(&self) -> u32 {
        self & OPCODE_MASK
    }

    #[inline(always)]
    fn rd(&self) -> usize {
        ((self >> 7) & RD_MASK) as usize
    }

    #[inline(always)]
    fn rs1(&self) -> usize {
        ((self >> 15) & RS1_MASK) as usize
    }

    #[inline(always)]
    fn rs2(&self) -> usize {
        ((self >> 20) & RS2_MASK) as usize
    }

    #[inline(always)]
    fn funct3(&self) -> u32 {
        (self >> 12) & FUNCT3_MASK
    }

    #[inline(always)]
    fn funct7(&self) -> u32 {
        (self >> 25) & FUNCT7_MASK
    }
}

/// Instruction format tag for the supported subset.
///
/// Determines which immediate encoding applies. Opcodes outside the
/// subset map to [`Format::Other`] and carry a zero immediate.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub enum Format {
    /// Register-register arithmetic (no immediate).
    R,
    /// Immediate arithmetic and loads.
    I,
    /// Stores.
    S,
    /// Conditional branches.
    B,
    /// Anything outside the subset; decodes to an inert instruction.
    #[default]
    Other,
}

impl Format {
    /// Classifies an opcode into its instruction format.
    pub fn from_opcode(opcode: u32) -> Self {
        match opcode {
            opcodes::OP_REG => Self::R,
            opcodes::OP_IMM | opcodes::OP_LOAD => Self::I,
            opcodes::OP_STORE => Self::S,
            opcodes::OP_BRANCH => Self::B,
            _ => Self::Other,
        }
    }
}

/// Decoded instruction structure containing all extracted fields.
///
/// Immutable once produced by [`crate::isa::decode::decode`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Decoded {
    /// Raw 32-bit instruction encoding.
    pub raw: u32,
    /// Extracted opcode field.
    pub opcode: u32,
    /// Destination register index.
    pub rd: usize,
    /// First source register index.
    pub rs1: usize,
    /// Second source register index.
    pub rs2: usize,
    /// Function code field 3.
    pub funct3: u32,
    /// Function code field 7.
    pub funct7: u32,
    /// Sign-extended immediate value.
    pub imm: i32,
    /// Instruction format tag.
    pub format: Format,
}
