//! funct3 values for the supported subset.

/// ADD/SUB (R-type) and ADDI (I-type); funct7 selects ADD vs SUB.
pub const ADD_SUB: u32 = 0b000;

/// Shift left logical.
pub const SLL: u32 = 0b001;

/// Set less than (signed); SLTI in I-type form.
pub const SLT: u32 = 0b010;

/// Bitwise XOR.
pub const XOR: u32 = 0b100;

/// Bitwise OR.
pub const OR: u32 = 0b110;

/// Bitwise AND.
pub const AND: u32 = 0b111;
