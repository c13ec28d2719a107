//! Arithmetic Logic Unit (ALU).
//!
//! This module implements the integer ALU used by the Execute stage. It
//! covers the fixed operation table of the supported subset: add/sub,
//! bitwise logic, shift-left, signed compare, and address generation for
//! loads and stores. All arithmetic wraps modulo 2^32. Any combination
//! outside the table yields 0 — a defined result, never an error.

use crate::isa::{funct3, funct7, opcodes};

/// Mask limiting shift amounts to the lower five bits of the operand.
const SHIFT_AMOUNT_MASK: u32 = 0x1F;

/// Arithmetic Logic Unit for the supported integer subset.
#[derive(Debug)]
pub struct Alu;

impl Alu {
    /// Executes an ALU operation.
    ///
    /// Dispatches on opcode and function codes per the fixed table.
    ///
    /// # Arguments
    ///
    /// * `op1`    - First operand (rs1 value)
    /// * `op2`    - Second operand (rs2 value or immediate, per ALUSrc)
    /// * `funct3` - Function code selecting the operation within an opcode
    /// * `funct7` - Function code selecting alternate encodings (SUB)
    /// * `opcode` - Major opcode of the instruction
    ///
    /// # Examples
    ///
    /// ```
    /// use pipevis_core::core::units::Alu;
    /// use pipevis_core::isa::opcodes::OP_REG;
    ///
    /// assert_eq!(Alu::execute(5, 3, 0, 0, OP_REG), 8);
    /// assert_eq!(Alu::execute(5, 3, 0, 0x20, OP_REG), 2);
    /// ```
    pub fn execute(op1: u32, op2: u32, funct3: u32, funct7: u32, opcode: u32) -> u32 {
        match opcode {
            opcodes::OP_REG => match funct3 {
                funct3::ADD_SUB => {
                    if funct7 == funct7::ALT {
                        op1.wrapping_sub(op2)
                    } else {
                        op1.wrapping_add(op2)
                    }
                }
                funct3::AND => op1 & op2,
                funct3::OR => op1 | op2,
                funct3::XOR => op1 ^ op2,
                funct3::SLL => op1 << (op2 & SHIFT_AMOUNT_MASK),
                _ => 0,
            },
            opcodes::OP_IMM => match funct3 {
                funct3::ADD_SUB => op1.wrapping_add(op2),
                funct3::SLT => u32::from((op1 as i32) < (op2 as i32)),
                _ => 0,
            },
            // Loads and stores compute the effective byte address.
            opcodes::OP_LOAD | opcodes::OP_STORE => op1.wrapping_add(op2),
            _ => 0,
        }
    }
}
