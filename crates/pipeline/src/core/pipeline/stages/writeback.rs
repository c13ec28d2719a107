//! Write-back (WB) Stage.
//!
//! The final stage of the pipeline. It commits the pending MEM/WB result
//! to the register file. A destination of x0 suppresses the write (no-ops
//! and stores leave rd at 0, and x0 is architecturally unwritable anyway).

use crate::common::constants::WRITEBACK_FILL_CYCLES;
use crate::core::pipeline::engine::PipelineEngine;

/// Executes the write-back stage.
///
/// Active once the cycle counter exceeds the write-back fill latency, so
/// the earliest visible register write is in cycle 5.
pub fn wb_stage(engine: &mut PipelineEngine) {
    if engine.cycle <= WRITEBACK_FILL_CYCLES {
        return;
    }

    if engine.mem_wb.rd != 0 {
        if engine.trace {
            eprintln!(
                "WB  pc={:#x} x{} <= {:#x}",
                engine.mem_wb.pc, engine.mem_wb.rd, engine.mem_wb.result
            );
        }
        engine.regs.write(engine.mem_wb.rd, engine.mem_wb.result);
    }
}
