//! Execute (EX) Stage.
//!
//! The third stage of the pipeline. It selects the second ALU operand
//! (immediate for immediate/load/store formats, rs2 value otherwise),
//! invokes the ALU, and populates the EX/MEM latch with the result, the
//! zero flag, and the rs2 value staged as store write data.

use crate::common::constants::EXECUTE_FILL_CYCLES;
use crate::core::pipeline::engine::PipelineEngine;
use crate::core::units::Alu;
use crate::isa::decode::decode;
use crate::isa::opcodes;

/// Executes the execute stage.
///
/// Active once the cycle counter exceeds the execute fill latency.
/// Branch instructions reach the ALU like everything else but their
/// results are never used to redirect the PC.
pub fn ex_stage(engine: &mut PipelineEngine) {
    if engine.cycle <= EXECUTE_FILL_CYCLES {
        return;
    }

    let d = decode(engine.id_ex.inst);

    let op2 = match d.opcode {
        opcodes::OP_IMM | opcodes::OP_LOAD | opcodes::OP_STORE => engine.id_ex.imm,
        _ => engine.id_ex.rs2_val,
    };

    let alu_result = Alu::execute(engine.id_ex.rs1_val, op2, d.funct3, d.funct7, d.opcode);

    if engine.trace {
        eprintln!("EX  pc={:#x} alu={:#x}", engine.id_ex.pc, alu_result);
    }

    engine.ex_mem.pc = engine.id_ex.pc;
    engine.ex_mem.inst = engine.id_ex.inst;
    engine.ex_mem.alu_result = alu_result;
    engine.ex_mem.rd = engine.id_ex.rd;
    engine.ex_mem.mem_write_data = engine.id_ex.rs2_val;
    engine.ex_mem.zero_flag = alu_result == 0;
}
