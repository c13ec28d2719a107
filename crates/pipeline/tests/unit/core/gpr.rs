//! # General-Purpose Register Tests
//!
//! Tests for the register file, including the hardwired-zero invariant on
//! register x0.

use pipevis_core::core::arch::Gpr;

#[test]
fn new_initializes_to_zero() {
    let gpr = Gpr::new();
    for i in 0..32 {
        assert_eq!(gpr.read(i), 0);
    }
}

#[test]
fn x0_always_reads_zero() {
    let mut gpr = Gpr::new();
    gpr.write(0, 0xDEAD_BEEF);
    assert_eq!(gpr.read(0), 0);
}

#[test]
fn x0_ignores_writes() {
    let mut gpr = Gpr::new();
    for value in [1u32, 0xFFFF_FFFF, 0x8000_0000] {
        gpr.write(0, value);
        assert_eq!(gpr.read(0), 0);
    }
}

#[test]
fn read_write_round_trip() {
    let mut gpr = Gpr::new();
    gpr.write(1, 0x1234_5678);
    gpr.write(31, 0x9999_AAAA);
    assert_eq!(gpr.read(1), 0x1234_5678);
    assert_eq!(gpr.read(31), 0x9999_AAAA);
}

#[test]
fn registers_are_independent() {
    let mut gpr = Gpr::new();
    gpr.write(1, 111);
    gpr.write(2, 222);
    gpr.write(3, 333);

    assert_eq!(gpr.read(1), 111);
    assert_eq!(gpr.read(2), 222);
    assert_eq!(gpr.read(3), 333);
}

#[test]
fn multiple_writes_keep_last_value() {
    let mut gpr = Gpr::new();
    gpr.write(5, 100);
    gpr.write(5, 200);
    gpr.write(5, 300);
    assert_eq!(gpr.read(5), 300);
}

#[test]
fn snapshot_copies_full_state() {
    let mut gpr = Gpr::new();
    for i in 1..32 {
        gpr.write(i, i as u32 * 10);
    }

    let snap = gpr.snapshot();
    assert_eq!(snap[0], 0);
    for (i, &val) in snap.iter().enumerate().skip(1) {
        assert_eq!(val, i as u32 * 10);
    }

    // The snapshot is a copy, not a view.
    gpr.write(1, 9999);
    assert_eq!(snap[1], 10);
}

#[test]
fn x0_stays_zero_after_writing_everything() {
    let mut gpr = Gpr::new();
    for i in 0..32 {
        gpr.write(i, 0x1111_1111);
    }
    assert_eq!(gpr.read(0), 0);
    assert_eq!(gpr.snapshot()[0], 0);
}
