//! Architectural constants for the pipeline model.
//!
//! Arena capacities and the per-stage fill latencies live here so the
//! pipeline-fill shape is declared in one place rather than scattered as
//! magic cycle counts through the stage logic.

/// Canonical no-op encoding (`ADDI x0, x0, 0`).
///
/// Malformed program input degrades to this word, latches hold it before
/// any real instruction reaches them, and instruction memory is padded
/// with it.
pub const NOP_INSTRUCTION: u32 = 0x0000_0013;

/// Number of general-purpose registers.
pub const REGISTER_COUNT: usize = 32;

/// Data memory capacity in 32-bit words.
///
/// Load/store byte addresses are reduced to a word index modulo this
/// capacity; see [`crate::core::arch::mem::DataMemory::word_index`].
pub const MEMORY_WORDS: usize = 256;

/// Minimum instruction memory depth in words.
///
/// Shorter programs are padded with [`NOP_INSTRUCTION`] up to this depth.
pub const MIN_PROGRAM_WORDS: usize = 64;

/// Size of one instruction in bytes; the fetch stage advances the PC by this.
pub const INSTRUCTION_BYTES: u32 = 4;

/// Fill latency of the decode stage in cycles.
///
/// The decode stage is active only once the cycle counter exceeds this
/// value: the first fetched instruction reaches the IF/ID latch at the end
/// of cycle 1 and can be decoded in cycle 2.
pub const DECODE_FILL_CYCLES: u64 = 1;

/// Fill latency of the execute stage in cycles.
pub const EXECUTE_FILL_CYCLES: u64 = 2;

/// Fill latency of the memory stage in cycles.
pub const MEMORY_FILL_CYCLES: u64 = 3;

/// Fill latency of the write-back stage in cycles.
///
/// The earliest architecturally visible register write therefore happens
/// in cycle 5, the textbook pipeline-fill shape.
pub const WRITEBACK_FILL_CYCLES: u64 = 4;
