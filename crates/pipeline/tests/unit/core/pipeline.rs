//! Full-Pipeline Behavior Tests.
//!
//! Drives the engine over small programs and checks the cycle-exact
//! timing law: an instruction in slot j is fetched in cycle j+1, decoded
//! in j+2, executed in j+3, accesses memory in j+4, and writes back in
//! j+5. Also covers the seeded start state, x0 suppression, and the
//! stale-read behavior that follows from having no forwarding.

use pipevis_core::PipelineEngine;
use pipevis_core::common::constants::{MIN_PROGRAM_WORDS, NOP_INSTRUCTION};
use pipevis_core::core::pipeline::signals::ControlSignals;
use pipevis_core::isa::{funct3, opcodes};

use crate::common::{addi, lw, r_type, sw};

/// Pads a handful of instruction words out to a full program.
fn program(words: &[u32]) -> Vec<u32> {
    let mut imem = words.to_vec();
    imem.resize(MIN_PROGRAM_WORDS, NOP_INSTRUCTION);
    imem
}

#[test]
fn first_cycle_shows_fill_state() {
    let mut engine = PipelineEngine::new(program(&[addi(5, 0, 7)]));
    let snap = engine.step();

    assert_eq!(snap.cycle, 1);
    assert_eq!(snap.pc, 4);
    // Fetch ran; everything downstream still holds the fill state.
    assert_eq!(snap.if_id.pc, 0);
    assert_eq!(snap.if_id.inst, addi(5, 0, 7));
    assert_eq!(snap.id_ex.inst, NOP_INSTRUCTION);
    assert_eq!(snap.mem_wb.rd, 0);
    assert_eq!(snap.control, ControlSignals::default());
}

#[test]
fn seed_state_is_applied() {
    let mut engine = PipelineEngine::new(program(&[]));
    let snap = engine.step();

    assert_eq!(snap.registers[2], 100);
    assert_eq!(snap.registers[3], 200);
    assert_eq!(snap.registers[17], 50);
    assert_eq!(snap.memory.get(&10), Some(&123));
    assert_eq!(snap.memory.len(), 1);
}

#[test]
fn pc_advances_four_bytes_per_cycle() {
    let mut engine = PipelineEngine::new(program(&[]));
    let trace = engine.run(3);
    assert_eq!(trace.cycles()[0].pc, 4);
    assert_eq!(trace.cycles()[1].pc, 8);
    assert_eq!(trace.cycles()[2].pc, 12);
}

#[test]
fn addi_writes_back_in_cycle_five() {
    let mut engine = PipelineEngine::new(program(&[addi(5, 0, 7)]));
    let trace = engine.run(5);

    assert_eq!(
        trace.cycles()[3].registers[5],
        0,
        "write-back must not land before cycle 5"
    );
    assert_eq!(trace.cycles()[4].registers[5], 7);
}

#[test]
fn control_signals_follow_the_decoded_instruction() {
    let imem = program(&[
        addi(5, 0, 7),
        r_type(opcodes::OP_REG, 4, funct3::ADD_SUB, 2, 3, 0),
    ]);
    let mut engine = PipelineEngine::new(imem);
    let trace = engine.run(3);

    // Cycle 2 decodes the ADDI in slot 0.
    let c2 = &trace.cycles()[1].control;
    assert!(c2.regwrite);
    assert!(c2.alusrc);
    assert!(!c2.memread);

    // Cycle 3 decodes the ADD in slot 1.
    let c3 = &trace.cycles()[2].control;
    assert!(c3.regwrite);
    assert!(!c3.alusrc);
}

#[test]
fn register_add_uses_seeded_operands() {
    // ADD x4, x2, x3 = 100 + 200, written back in cycle 5.
    let imem = program(&[r_type(opcodes::OP_REG, 4, funct3::ADD_SUB, 2, 3, 0)]);
    let mut engine = PipelineEngine::new(imem);
    let trace = engine.run(5);
    assert_eq!(trace.cycles()[4].registers[4], 300);
}

#[test]
fn store_then_load_round_trips_through_memory() {
    // Slots are spaced so each dependent instruction decodes after its
    // producer has written back.
    let imem = program(&[
        addi(1, 0, 40),
        NOP_INSTRUCTION,
        NOP_INSTRUCTION,
        sw(17, 1, 0),
        NOP_INSTRUCTION,
        NOP_INSTRUCTION,
        lw(6, 1, 0),
    ]);
    let mut engine = PipelineEngine::new(imem);
    let trace = engine.run(12);

    // The seed value in word 10 survives until the store reaches MEM.
    assert_eq!(trace.cycles()[5].memory.get(&10), Some(&123));
    // SW x17, 0(x1) hits word 10 (byte 40) in cycle 7.
    assert_eq!(trace.cycles()[6].memory.get(&10), Some(&50));
    // LW x6, 0(x1) writes back in cycle 11.
    assert_eq!(trace.cycles()[9].registers[6], 0);
    assert_eq!(trace.cycles()[10].registers[6], 50);
}

#[test]
fn store_does_not_write_a_register() {
    let imem = program(&[addi(1, 0, 40), NOP_INSTRUCTION, NOP_INSTRUCTION, sw(17, 1, 0)]);
    let mut engine = PipelineEngine::new(imem);
    let trace = engine.run(9);

    // The store's MEM/WB rd is 0, so write-back is suppressed; x0 and the
    // rest of the file are untouched by it.
    let regs_before = trace.cycles()[6].registers;
    let regs_after = trace.cycles()[8].registers;
    assert_eq!(regs_before, regs_after);
}

#[test]
fn writes_to_x0_are_suppressed() {
    let mut engine = PipelineEngine::new(program(&[addi(0, 0, 5)]));
    let trace = engine.run(6);
    for snap in &trace {
        assert_eq!(snap.registers[0], 0);
    }
}

#[test]
fn dependent_instruction_reads_stale_value() {
    // ADDI x1, x0, 5 then immediately ADDI x2, x1, 1: the second decode
    // happens two cycles before the first write-back, so it sees x1 = 0.
    let imem = program(&[addi(1, 0, 5), addi(2, 1, 1)]);
    let mut engine = PipelineEngine::new(imem);
    let trace = engine.run(6);

    assert_eq!(trace.cycles()[4].registers[1], 5);
    assert_eq!(
        trace.cycles()[5].registers[2],
        1,
        "no forwarding: the dependent add must use the stale x1"
    );
}

#[test]
fn run_produces_one_snapshot_per_cycle() {
    let mut engine = PipelineEngine::new(program(&[]));
    let trace = engine.run(20);
    assert_eq!(trace.len(), 20);
    for (i, snap) in trace.iter().enumerate() {
        assert_eq!(snap.cycle, i as u64 + 1);
    }
}

#[test]
fn runs_are_deterministic() {
    let imem = program(&[addi(5, 0, 7), sw(17, 2, 0), lw(6, 2, 0)]);
    let mut first = PipelineEngine::new(imem.clone());
    let mut second = PipelineEngine::new(imem);
    assert_eq!(first.run(15), second.run(15));
}
