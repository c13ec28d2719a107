//! General-Purpose Register File.
//!
//! This module implements the register file for the pipeline model. It
//! performs the following:
//! 1. **Storage:** Maintains 32 integer registers (`x0`-`x31`).
//! 2. **Invariant Enforcement:** Ensures that register `x0` is hardwired to zero.
//! 3. **Snapshotting:** Provides a full copy of the register state per cycle.

use crate::common::constants::REGISTER_COUNT;

/// General-purpose register file.
///
/// Contains 32 registers of 32 bits each. Register `x0` is hardwired to
/// zero: reads always return 0 and writes targeting it are silently
/// discarded.
#[derive(Debug, Clone)]
pub struct Gpr {
    regs: [u32; REGISTER_COUNT],
}

impl Gpr {
    /// Creates a new register file with all registers initialized to zero.
    pub fn new() -> Self {
        Self {
            regs: [0; REGISTER_COUNT],
        }
    }

    /// Reads a register value.
    ///
    /// Register `x0` always returns 0.
    pub fn read(&self, idx: usize) -> u32 {
        if idx == 0 { 0 } else { self.regs[idx] }
    }

    /// Writes a value to a register.
    ///
    /// Writes targeting `x0` are discarded.
    pub fn write(&mut self, idx: usize, val: u32) {
        if idx != 0 {
            self.regs[idx] = val;
        }
    }

    /// Returns a copy of the full register state for a cycle snapshot.
    pub fn snapshot(&self) -> [u32; REGISTER_COUNT] {
        self.regs
    }
}

impl Default for Gpr {
    fn default() -> Self {
        Self::new()
    }
}
