//! Major opcodes (bits 6-0) for the supported instruction subset.

/// Load instructions (LW).
pub const OP_LOAD: u32 = 0b0000011;

/// Immediate arithmetic instructions (ADDI, SLTI).
pub const OP_IMM: u32 = 0b0010011;

/// Store instructions (SW).
pub const OP_STORE: u32 = 0b0100011;

/// Register-Register arithmetic (ADD, SUB, SLL, etc.).
pub const OP_REG: u32 = 0b0110011;

/// Conditional Branch instructions (BEQ, BNE, etc.).
///
/// Branch immediates are decoded for display, but the model performs no
/// PC redirection.
pub const OP_BRANCH: u32 = 0b1100011;
