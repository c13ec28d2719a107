//! Memory Access (MEM) Stage.
//!
//! The fourth stage of the pipeline. It re-decodes the instruction carried
//! in the EX/MEM latch to classify it: loads read data memory at the ALU
//! address, stores write the staged rs2 value there (and forward the
//! address as their result), and everything else passes the ALU result
//! through. The MEM/WB latch receives the pending write-back value.

use crate::common::constants::MEMORY_FILL_CYCLES;
use crate::core::pipeline::engine::PipelineEngine;
use crate::isa::decode::decode;
use crate::isa::opcodes;

/// Executes the memory stage.
///
/// Active once the cycle counter exceeds the memory fill latency. Byte
/// addresses are reduced to word indices by the data memory's documented
/// divide-and-modulo policy.
pub fn mem_stage(engine: &mut PipelineEngine) {
    if engine.cycle <= MEMORY_FILL_CYCLES {
        return;
    }

    let d = decode(engine.ex_mem.inst);
    let addr = engine.ex_mem.alu_result;

    let result = match d.opcode {
        opcodes::OP_LOAD => {
            let val = engine.mem.read_word(addr);
            if engine.trace {
                eprintln!("MEM pc={:#x} load [{:#x}] => {:#x}", engine.ex_mem.pc, addr, val);
            }
            val
        }
        opcodes::OP_STORE => {
            engine.mem.write_word(addr, engine.ex_mem.mem_write_data);
            if engine.trace {
                eprintln!(
                    "MEM pc={:#x} store [{:#x}] <= {:#x}",
                    engine.ex_mem.pc, addr, engine.ex_mem.mem_write_data
                );
            }
            addr
        }
        _ => engine.ex_mem.alu_result,
    };

    engine.mem_wb.pc = engine.ex_mem.pc;
    engine.mem_wb.result = result;
    engine.mem_wb.rd = engine.ex_mem.rd;
}
