//! Instruction Fetch (IF) Stage.
//!
//! The first stage of the pipeline. It loads the word addressed by the
//! program counter into the IF/ID latch and advances the PC by one
//! instruction. There is no prediction or redirection: the PC only ever
//! moves forward sequentially.

use crate::common::constants::INSTRUCTION_BYTES;
use crate::core::pipeline::engine::PipelineEngine;

/// Executes the instruction fetch stage.
///
/// Active whenever the PC's word index is within instruction memory
/// bounds; once the program has been fully fetched the latch simply keeps
/// its last contents while the tail of the pipeline drains.
pub fn if_stage(engine: &mut PipelineEngine) {
    let word_idx = (engine.pc / INSTRUCTION_BYTES) as usize;
    if word_idx >= engine.imem.len() {
        return;
    }

    let inst = engine.imem[word_idx];
    if engine.trace {
        eprintln!("IF  pc={:#x} inst={:#010x}", engine.pc, inst);
    }

    engine.if_id.pc = engine.pc;
    engine.if_id.inst = inst;
    engine.pc += INSTRUCTION_BYTES;
}
