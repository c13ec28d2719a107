//! Data Memory Tests.
//!
//! Covers the byte-address-to-word-index reduction policy, read/write
//! round trips, seeding by index, and the sparse non-zero view.

use pipevis_core::core::arch::DataMemory;

#[test]
fn word_index_divides_by_four() {
    assert_eq!(DataMemory::word_index(0), 0);
    assert_eq!(DataMemory::word_index(4), 1);
    assert_eq!(DataMemory::word_index(40), 10);
}

#[test]
fn word_index_truncates_unaligned_addresses() {
    assert_eq!(DataMemory::word_index(42), 10);
    assert_eq!(DataMemory::word_index(43), 10);
}

#[test]
fn word_index_wraps_beyond_capacity() {
    // 1024 bytes = word 256, which wraps to 0 in a 256-word arena.
    assert_eq!(DataMemory::word_index(1024), 0);
    assert_eq!(DataMemory::word_index(1028), 1);
}

#[test]
fn read_write_round_trip() {
    let mut mem = DataMemory::new();
    mem.write_word(40, 0xCAFE);
    assert_eq!(mem.read_word(40), 0xCAFE);
}

#[test]
fn write_and_read_agree_through_wrapping() {
    let mut mem = DataMemory::new();
    mem.write_word(1024, 7);
    assert_eq!(mem.read_word(0), 7);
}

#[test]
fn write_indexed_wraps_modulo_capacity() {
    let mut mem = DataMemory::new();
    mem.write_indexed(256, 5);
    assert_eq!(mem.read_word(0), 5);
}

#[test]
fn new_memory_is_all_zero() {
    let mem = DataMemory::new();
    assert!(mem.nonzero_words().is_empty());
}

#[test]
fn nonzero_words_omits_zeroes() {
    let mut mem = DataMemory::new();
    mem.write_indexed(10, 123);
    mem.write_indexed(20, 0);

    let view = mem.nonzero_words();
    assert_eq!(view.len(), 1);
    assert_eq!(view.get(&10), Some(&123));
}

#[test]
fn nonzero_words_drops_cleared_entries() {
    let mut mem = DataMemory::new();
    mem.write_indexed(10, 123);
    mem.write_word(40, 0);
    assert!(mem.nonzero_words().is_empty());
}
