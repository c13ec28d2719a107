//! Word-addressable data memory.
//!
//! A fixed 256-word arena accessed by bounds-checked index. Byte addresses
//! produced by the ALU are reduced to a word index with an explicit
//! divide-by-4 plus modulo policy, so out-of-range addresses wrap instead
//! of faulting — the model has no memory protection to violate.

use std::collections::BTreeMap;

use crate::common::constants::MEMORY_WORDS;

/// Word-addressable data memory arena.
#[derive(Debug, Clone)]
pub struct DataMemory {
    words: [u32; MEMORY_WORDS],
}

impl DataMemory {
    /// Creates a zeroed data memory.
    pub fn new() -> Self {
        Self {
            words: [0; MEMORY_WORDS],
        }
    }

    /// Reduces a byte address to a word index.
    ///
    /// Policy: `(byte_addr / 4) % capacity`. Addresses beyond the arena
    /// wrap modulo the capacity; this is the documented address reduction
    /// rule, shared by loads and stores.
    pub fn word_index(byte_addr: u32) -> usize {
        (byte_addr / 4) as usize % MEMORY_WORDS
    }

    /// Reads the word addressed by a byte address.
    pub fn read_word(&self, byte_addr: u32) -> u32 {
        self.words[Self::word_index(byte_addr)]
    }

    /// Writes the word addressed by a byte address.
    pub fn write_word(&mut self, byte_addr: u32, val: u32) {
        self.words[Self::word_index(byte_addr)] = val;
    }

    /// Writes a word directly by word index, wrapping modulo capacity.
    ///
    /// Used for seeding memory at run start.
    pub fn write_indexed(&mut self, word_idx: usize, val: u32) {
        self.words[word_idx % MEMORY_WORDS] = val;
    }

    /// Returns the sparse view of memory: every non-zero word keyed by its
    /// word index.
    ///
    /// Zero-valued words are omitted, so the snapshot contract's "no zero
    /// entries" invariant holds by construction.
    pub fn nonzero_words(&self) -> BTreeMap<usize, u32> {
        self.words
            .iter()
            .enumerate()
            .filter(|&(_, &w)| w != 0)
            .map(|(i, &w)| (i, w))
            .collect()
    }
}

impl Default for DataMemory {
    fn default() -> Self {
        Self::new()
    }
}
