//! Instruction Decode (ID) Stage.
//!
//! The second stage of the pipeline. It performs the following:
//! 1. **Decoding:** Converts the raw bits in the IF/ID latch into structured fields.
//! 2. **Register Read:** Reads source operands from the register file (x0 reads 0).
//! 3. **Control Generation:** Derives the six control booleans from the opcode.
//!
//! Register values read here are whatever the register file currently
//! holds. With no forwarding, an instruction depending on a result that
//! has not yet written back reads a stale value — accepted behavior.

use crate::common::constants::DECODE_FILL_CYCLES;
use crate::core::pipeline::engine::PipelineEngine;
use crate::core::pipeline::signals::ControlSignals;
use crate::isa::decode::decode;

/// Executes the instruction decode stage.
///
/// Active once the cycle counter exceeds the decode fill latency. Decodes
/// the IF/ID instruction, reads both source registers, rederives the
/// control signals, and populates the ID/EX latch.
pub fn id_stage(engine: &mut PipelineEngine) {
    if engine.cycle <= DECODE_FILL_CYCLES {
        return;
    }

    let d = decode(engine.if_id.inst);
    engine.ctrl = ControlSignals::for_opcode(d.opcode);

    if engine.trace {
        eprintln!(
            "ID  pc={:#x} rd={} rs1={} rs2={} imm={}",
            engine.if_id.pc, d.rd, d.rs1, d.rs2, d.imm
        );
    }

    engine.id_ex.pc = engine.if_id.pc;
    engine.id_ex.inst = engine.if_id.inst;
    engine.id_ex.rs1 = d.rs1;
    engine.id_ex.rs2 = d.rs2;
    engine.id_ex.rd = d.rd;
    engine.id_ex.rs1_val = engine.regs.read(d.rs1);
    engine.id_ex.rs2_val = engine.regs.read(d.rs2);
    engine.id_ex.imm = d.imm as u32;
}
