//! funct7 values for the supported subset.

/// Alternate-encoding funct7 (bit 5 set): selects SUB instead of ADD.
pub const ALT: u32 = 0b0100000;
