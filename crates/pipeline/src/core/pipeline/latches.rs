//! Pipeline latch structures for inter-stage communication.
//!
//! This module defines the records carried between the 5 stages:
//! Fetch → Decode → Execute → Memory → Write-back.
//!
//! Each latch holds exactly the values produced by the previous cycle's
//! upstream stage. Before any real instruction reaches a latch it holds
//! the no-op word and zeroed fields — the pipeline-fill state — which is
//! why `Default` fills instruction fields with the no-op encoding rather
//! than zero.

use serde::Serialize;

use crate::common::constants::NOP_INSTRUCTION;

/// The IF/ID latch (Fetch to Decode).
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct IfIdLatch {
    /// Program counter of the fetched instruction.
    pub pc: u32,
    /// Raw 32-bit instruction encoding.
    pub inst: u32,
}

impl Default for IfIdLatch {
    fn default() -> Self {
        Self {
            pc: 0,
            inst: NOP_INSTRUCTION,
        }
    }
}

/// The ID/EX latch (Decode to Execute).
///
/// Carries decoded register indices, the values read from the register
/// file, and the sign-extended immediate.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct IdExLatch {
    /// Program counter of the instruction.
    pub pc: u32,
    /// Raw 32-bit instruction encoding.
    pub inst: u32,
    /// First source register index.
    pub rs1: usize,
    /// Second source register index.
    pub rs2: usize,
    /// Destination register index.
    pub rd: usize,
    /// Value read from rs1 (register 0 always reads 0).
    pub rs1_val: u32,
    /// Value read from rs2.
    pub rs2_val: u32,
    /// Sign-extended immediate, as a 32-bit pattern.
    pub imm: u32,
}

impl Default for IdExLatch {
    fn default() -> Self {
        Self {
            pc: 0,
            inst: NOP_INSTRUCTION,
            rs1: 0,
            rs2: 0,
            rd: 0,
            rs1_val: 0,
            rs2_val: 0,
            imm: 0,
        }
    }
}

/// The EX/MEM latch (Execute to Memory).
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ExMemLatch {
    /// Program counter of the instruction.
    pub pc: u32,
    /// Raw instruction encoding, carried so the memory stage can re-decode
    /// the opcode. Not part of the snapshot contract.
    #[serde(skip)]
    pub inst: u32,
    /// ALU result, or the effective byte address for loads and stores.
    pub alu_result: u32,
    /// Destination register index.
    pub rd: usize,
    /// rs2 value staged as the store write data.
    pub mem_write_data: u32,
    /// Whether the ALU result was zero.
    pub zero_flag: bool,
}

impl Default for ExMemLatch {
    fn default() -> Self {
        Self {
            pc: 0,
            inst: NOP_INSTRUCTION,
            alu_result: 0,
            rd: 0,
            mem_write_data: 0,
            zero_flag: false,
        }
    }
}

/// The MEM/WB latch (Memory to Write-back).
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct MemWbLatch {
    /// Program counter of the instruction.
    pub pc: u32,
    /// Value pending write-back: loaded data, the store address, or the
    /// ALU result passed through.
    pub result: u32,
    /// Destination register index; write-back is suppressed when 0.
    pub rd: usize,
}
