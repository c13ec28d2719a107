//! The per-cycle pipeline state machine.
//!
//! `PipelineEngine` owns every piece of run state: the program counter,
//! cycle counter, register file, data memory, instruction memory, the four
//! latches, and the control signals most recently derived at decode. One
//! call to [`PipelineEngine::step`] advances everything by exactly one
//! cycle and yields one snapshot; a run is a plain loop over `step`.
//!
//! Evaluation is single-threaded and fully deterministic: the snapshot
//! trace is a pure function of the loaded program, the fixed seed state,
//! and the requested cycle count.

use crate::config::Config;
use crate::core::arch::{DataMemory, Gpr};
use crate::core::pipeline::latches::{ExMemLatch, IdExLatch, IfIdLatch, MemWbLatch};
use crate::core::pipeline::signals::ControlSignals;
use crate::core::pipeline::stages;
use crate::trace::snapshot::{CycleSnapshot, Trace};

/// Fixed register/memory seed values applied at run start.
///
/// These give short demo programs something to compute with: a plausible
/// stack pointer in x2, operands in x3/x17, and one preloaded data word.
mod seeds {
    /// (register index, value) pairs written into the register file.
    pub const REGISTERS: [(usize, u32); 3] = [(2, 100), (3, 200), (17, 50)];

    /// (word index, value) pairs written into data memory.
    pub const MEMORY: [(usize, u32); 1] = [(10, 123)];
}

/// The 5-stage pipeline state machine.
///
/// # Examples
///
/// ```
/// use pipevis_core::PipelineEngine;
/// use pipevis_core::sim::loader::load_program;
///
/// let mut engine = PipelineEngine::new(load_program("00000013"));
/// let trace = engine.run(20);
/// assert_eq!(trace.len(), 20);
/// ```
#[derive(Debug)]
pub struct PipelineEngine {
    /// Program counter, in bytes.
    pub pc: u32,
    /// Cycle counter; the first call to `step` runs cycle 1.
    pub cycle: u64,
    /// General-purpose register file.
    pub regs: Gpr,
    /// Data memory arena.
    pub mem: DataMemory,
    /// Instruction memory, one word per instruction slot.
    pub imem: Vec<u32>,
    /// IF/ID latch.
    pub if_id: IfIdLatch,
    /// ID/EX latch.
    pub id_ex: IdExLatch,
    /// EX/MEM latch.
    pub ex_mem: ExMemLatch,
    /// MEM/WB latch.
    pub mem_wb: MemWbLatch,
    /// Control signals derived by the most recent decode.
    pub ctrl: ControlSignals,
    /// Emit one line per active stage to stderr.
    pub trace: bool,
}

impl PipelineEngine {
    /// Creates an engine over the given instruction memory with the fixed
    /// seed register/memory state applied.
    pub fn new(imem: Vec<u32>) -> Self {
        let mut regs = Gpr::new();
        for (idx, val) in seeds::REGISTERS {
            regs.write(idx, val);
        }

        let mut mem = DataMemory::new();
        for (word, val) in seeds::MEMORY {
            mem.write_indexed(word, val);
        }

        Self {
            pc: 0,
            cycle: 0,
            regs,
            mem,
            imem,
            if_id: IfIdLatch::default(),
            id_ex: IdExLatch::default(),
            ex_mem: ExMemLatch::default(),
            mem_wb: MemWbLatch::default(),
            ctrl: ControlSignals::default(),
            trace: false,
        }
    }

    /// Creates an engine with stage logging taken from a configuration.
    pub fn with_config(imem: Vec<u32>, config: &Config) -> Self {
        let mut engine = Self::new(imem);
        engine.trace = config.trace;
        engine
    }

    /// Advances the pipeline by one cycle and returns the cycle's snapshot.
    ///
    /// Stages are evaluated in reverse pipeline order (write-back, memory,
    /// execute, decode, fetch) so each stage reads the latch contents
    /// produced by the previous cycle before that latch is overwritten.
    /// The snapshot reflects the state *after* all five stages have run.
    pub fn step(&mut self) -> CycleSnapshot {
        self.cycle += 1;

        stages::wb_stage(self);
        stages::mem_stage(self);
        stages::ex_stage(self);
        stages::id_stage(self);
        stages::if_stage(self);

        self.snapshot()
    }

    /// Runs the pipeline for `cycles` cycles, collecting one snapshot per
    /// cycle into an ordered trace.
    pub fn run(&mut self, cycles: u64) -> Trace {
        let mut trace = Trace::default();
        for _ in 0..cycles {
            trace.push(self.step());
        }
        trace
    }

    /// Builds the immutable snapshot of the current cycle's state.
    fn snapshot(&self) -> CycleSnapshot {
        CycleSnapshot {
            cycle: self.cycle,
            pc: self.pc,
            registers: self.regs.snapshot(),
            if_id: self.if_id.clone(),
            id_ex: self.id_ex.clone(),
            ex_mem: self.ex_mem.clone(),
            mem_wb: self.mem_wb.clone(),
            memory: self.mem.nonzero_words(),
            control: self.ctrl,
        }
    }
}
