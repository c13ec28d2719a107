//! Instruction decoder for the supported subset.
//!
//! Converts 32-bit encodings into the structured [`Decoded`] form,
//! handling per-format sign-extension of immediate values (I, S, B).
//! Unrecognized opcodes decode to zeroed fields instead of failing, which
//! is what lets foreign or garbage words flow through the pipeline as
//! inert instructions.

use crate::isa::instruction::{Decoded, Format, InstructionBits};
use crate::isa::opcodes;

/// Bit shift for extracting the I-type immediate field (bits 20-31).
///
/// I-type format: `imm[11:0] | rs1 | funct3 | rd | opcode`.
const I_IMM_SHIFT: u32 = 20;

/// Bit shift for the S-type immediate low field (bits 7-11).
///
/// S-type format: `imm[11:5] | rs2 | rs1 | funct3 | imm[4:0] | opcode`.
const S_IMM_LOW_SHIFT: u32 = 7;

/// Bit mask for the S-type immediate low field (5 bits: imm[4:0]).
const S_IMM_LOW_MASK: u32 = 0x1F;

/// Bit shift for the S-type immediate high field (bits 25-31).
const S_IMM_HIGH_SHIFT: u32 = 25;

/// Bit mask for the S-type immediate high field (7 bits: imm[11:5]).
const S_IMM_HIGH_MASK: u32 = 0x7F;

/// Bit shift for recombining the S-type immediate fields.
const S_IMM_COMBINED_SHIFT: u32 = 5;

/// Total width of the S-type immediate (12 bits).
const S_IMM_BITS: u32 = 12;

/// Bit shift for B-type immediate bit 11 (bit 7 of the instruction).
///
/// B-type format: `imm[12] | imm[10:5] | rs2 | rs1 | funct3 | imm[4:1] | imm[11] | opcode`.
/// The immediate is a signed even byte offset.
const B_IMM_11_SHIFT: u32 = 7;

/// Bit mask for B-type immediate bit 11.
const B_IMM_11_MASK: u32 = 1;

/// Bit shift for B-type immediate bits 4-1 (bits 8-11 of the instruction).
const B_IMM_4_1_SHIFT: u32 = 8;

/// Bit mask for B-type immediate bits 4-1.
const B_IMM_4_1_MASK: u32 = 0xF;

/// Bit shift for B-type immediate bits 10-5 (bits 25-30 of the instruction).
const B_IMM_10_5_SHIFT: u32 = 25;

/// Bit mask for B-type immediate bits 10-5.
const B_IMM_10_5_MASK: u32 = 0x3F;

/// Bit shift for B-type immediate bit 12 (bit 31, the sign bit).
const B_IMM_12_SHIFT: u32 = 31;

/// Bit mask for B-type immediate bit 12.
const B_IMM_12_MASK: u32 = 1;

/// Total width of the B-type immediate (13 bits, sign-extended).
const B_IMM_BITS: u32 = 13;

/// Bit position of bit 12 in the reconstructed B-type immediate.
const B_IMM_12_POS: u32 = 12;

/// Bit position of bit 11 in the reconstructed B-type immediate.
const B_IMM_11_POS: u32 = 11;

/// Bit position of bits 10-5 in the reconstructed B-type immediate.
const B_IMM_10_5_POS: u32 = 5;

/// Bit position of bits 4-1 in the reconstructed B-type immediate.
const B_IMM_4_1_POS: u32 = 1;

/// Decodes an instruction into its component fields.
///
/// Extracts opcode, register fields, function codes, the format tag, and
/// the format-dependent sign-extended immediate. Never fails; opcodes
/// outside the subset produce `Format::Other` with a zero immediate.
///
/// # Examples
///
/// ```
/// use pipevis_core::isa::decode::decode;
///
/// // ADDI x0, x0, 0 — the canonical no-op.
/// let d = decode(0x0000_0013);
/// assert_eq!(d.opcode, 0x13);
/// assert_eq!(d.rd, 0);
/// assert_eq!(d.imm, 0);
/// ```
pub fn decode(inst: u32) -> Decoded {
    let opcode = inst.opcode();

    let imm = match opcode {
        opcodes::OP_IMM | opcodes::OP_LOAD => decode_i_type_imm(inst),
        opcodes::OP_STORE => decode_s_type_imm(inst),
        opcodes::OP_BRANCH => decode_b_type_imm(inst),
        _ => 0,
    };

    Decoded {
        raw: inst,
        opcode,
        rd: InstructionBits::rd(&inst),
        rs1: InstructionBits::rs1(&inst),
        rs2: InstructionBits::rs2(&inst),
        funct3: InstructionBits::funct3(&inst),
        funct7: InstructionBits::funct7(&inst),
        imm,
        format: Format::from_opcode(opcode),
    }
}

/// Decodes the immediate value for I-type instructions.
///
/// The arithmetic right shift on the sign-converted word performs the
/// sign extension from bit 11 in one step.
fn decode_i_type_imm(inst: u32) -> i32 {
    (inst as i32) >> I_IMM_SHIFT
}

/// Decodes the immediate value for S-type instructions.
fn decode_s_type_imm(inst: u32) -> i32 {
    let low = (inst >> S_IMM_LOW_SHIFT) & S_IMM_LOW_MASK;
    let high = (inst >> S_IMM_HIGH_SHIFT) & S_IMM_HIGH_MASK;
    let combined = (high << S_IMM_COMBINED_SHIFT) | low;
    sign_extend(combined, S_IMM_BITS)
}

/// Decodes the immediate value for B-type instructions.
///
/// Reassembles the scattered branch offset fields per the standard
/// encoding. Decoded for display only; the execute stage never redirects
/// the PC.
fn decode_b_type_imm(inst: u32) -> i32 {
    let bit_11 = (inst >> B_IMM_11_SHIFT) & B_IMM_11_MASK;
    let bits_4_1 = (inst >> B_IMM_4_1_SHIFT) & B_IMM_4_1_MASK;
    let bits_10_5 = (inst >> B_IMM_10_5_SHIFT) & B_IMM_10_5_MASK;
    let bit_12 = (inst >> B_IMM_12_SHIFT) & B_IMM_12_MASK;

    let combined = (bit_12 << B_IMM_12_POS)
        | (bit_11 << B_IMM_11_POS)
        | (bits_10_5 << B_IMM_10_5_POS)
        | (bits_4_1 << B_IMM_4_1_POS);
    sign_extend(combined, B_IMM_BITS)
}

/// Sign-extends a `bits`-wide value to a full 32-bit signed integer.
fn sign_extend(value: u32, bits: u32) -> i32 {
    let shift = 32 - bits;
    ((value << shift) as i32) >> shift
}
