//! Pipeline control signals.
//!
//! The six classic single-cycle control booleans, derived purely from the
//! major opcode of the instruction in the decode stage and recomputed (or
//! parsed from an external trace) every cycle.

use serde::Serialize;

use crate::isa::opcodes;

/// Control signals derived from the decoded opcode.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct ControlSignals {
    /// Enable write to the destination register.
    pub regwrite: bool,
    /// Enable memory read (load).
    pub memread: bool,
    /// Enable memory write (store).
    pub memwrite: bool,
    /// Instruction is a conditional branch.
    pub branch: bool,
    /// Second ALU operand comes from the immediate, not rs2.
    pub alusrc: bool,
    /// Write-back value comes from memory, not the ALU.
    pub memtoreg: bool,
}

impl ControlSignals {
    /// Derives the control signals for a major opcode.
    ///
    /// Opcodes outside the subset yield all-false signals, matching their
    /// inert behavior in the rest of the model.
    pub fn for_opcode(opcode: u32) -> Self {
        match opcode {
            opcodes::OP_REG => Self {
                regwrite: true,
                ..Self::default()
            },
            opcodes::OP_IMM => Self {
                regwrite: true,
                alusrc: true,
                ..Self::default()
            },
            opcodes::OP_LOAD => Self {
                regwrite: true,
                memread: true,
                memtoreg: true,
                alusrc: true,
                ..Self::default()
            },
            opcodes::OP_STORE => Self {
                memwrite: true,
                alusrc: true,
                ..Self::default()
            },
            opcodes::OP_BRANCH => Self {
                branch: true,
                ..Self::default()
            },
            _ => Self::default(),
        }
    }
}
