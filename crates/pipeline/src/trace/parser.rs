//! Trace parser for external simulator logs.
//!
//! Reconstructs the snapshot sequence from the line-oriented log emitted
//! by an independent hardware-level simulator, so the visualization
//! contract is engine-agnostic. The parser is an explicit accumulator
//! state machine: a running register file plus an optional in-progress
//! snapshot that is taken and finalized exactly when a new `CYCLE` marker
//! or end of input is reached.
//!
//! Every line kind is recognized independently by prefix; anything
//! unrecognized (including malformed lines of a recognized kind) is
//! skipped. Hex fields are unsigned, variable-length, read until the
//! first non-hex character.

use crate::common::TraceError;
use crate::common::constants::REGISTER_COUNT;
use crate::trace::snapshot::{CycleSnapshot, Trace};

/// Accumulator state machine reconstructing snapshots from log lines.
#[derive(Debug, Default)]
pub struct TraceParser {
    /// Running register file; values persist across cycle records.
    regs: [u32; REGISTER_COUNT],
    /// The snapshot currently under construction, if a `CYCLE` marker has
    /// been seen and not yet flushed.
    current: Option<CycleSnapshot>,
    /// Completed snapshots, in input order.
    trace: Trace,
}

impl TraceParser {
    /// Creates an empty parser.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a complete log into a trace.
    ///
    /// Lines are processed strictly in order; field values accumulate
    /// onto the snapshot currently open, never onto a prior one. A log
    /// that yields zero snapshots is a parse failure, which the caller
    /// treats as the trigger to fall back to the software engine.
    ///
    /// # Errors
    ///
    /// Returns [`TraceError::EmptyTrace`] if no `CYCLE` marker was found.
    pub fn parse(log: &str) -> Result<Trace, TraceError> {
        let mut parser = Self::new();
        for line in log.lines() {
            parser.consume_line(line.trim());
        }
        parser.finish()
    }

    /// Dispatches one trimmed line by prefix.
    fn consume_line(&mut self, line: &str) {
        if line.starts_with("CYCLE ") {
            self.consume_cycle_marker(line);
        } else if line.starts_with("REG[") {
            self.consume_registers(line);
        } else if line.starts_with("MEM[") {
            self.consume_memory(line);
        } else if line.starts_with("IF_ID_INSTR=") {
            self.update_latch_pair(line, "IF_ID_INSTR=0x", "IF_ID_PC=0x", |s, inst, pc| {
                s.if_id.inst = inst;
                s.if_id.pc = pc;
            });
        } else if line.starts_with("ID_EX_INSTR=") {
            self.update_latch_pair(line, "ID_EX_INSTR=0x", "ID_EX_PC=0x", |s, inst, pc| {
                s.id_ex.inst = inst;
                s.id_ex.pc = pc;
            });
        } else if line.starts_with("ID_EX_RS1=") {
            self.update_latch_pair(line, "ID_EX_RS1=0x", "ID_EX_RS1_VAL=0x", |s, rs1, val| {
                s.id_ex.rs1 = rs1 as usize;
                s.id_ex.rs1_val = val;
            });
        } else if line.starts_with("ID_EX_RS2=") {
            self.update_latch_pair(line, "ID_EX_RS2=0x", "ID_EX_RS2_VAL=0x", |s, rs2, val| {
                s.id_ex.rs2 = rs2 as usize;
                s.id_ex.rs2_val = val;
            });
        } else if line.starts_with("ID_EX_RD=") {
            self.update_latch_pair(line, "ID_EX_RD=0x", "ID_EX_IMM=0x", |s, rd, imm| {
                s.id_ex.rd = rd as usize;
                s.id_ex.imm = imm;
            });
        } else if line.starts_with("EX_MEM_ALU=") {
            self.update_latch_pair(line, "EX_MEM_ALU=0x", "EX_MEM_PC=0x", |s, alu, pc| {
                s.ex_mem.alu_result = alu;
                s.ex_mem.pc = pc;
            });
        } else if line.starts_with("EX_MEM_RD=") {
            let rd = hex_value(line, "EX_MEM_RD=0x");
            let zero = flag_value(line, "EX_MEM_ZERO=");
            if let (Some(rd), Some(zero), Some(snapshot)) = (rd, zero, self.current.as_mut()) {
                snapshot.ex_mem.rd = rd as usize;
                snapshot.ex_mem.zero_flag = zero;
            }
        } else if line.starts_with("MEM_WB_DATA=") {
            self.update_latch_pair(line, "MEM_WB_DATA=0x", "MEM_WB_PC=0x", |s, result, pc| {
                s.mem_wb.result = result;
                s.mem_wb.pc = pc;
            });
        } else if line.starts_with("MEM_WB_RD=") {
            if let (Some(rd), Some(snapshot)) =
                (hex_value(line, "MEM_WB_RD=0x"), self.current.as_mut())
            {
                snapshot.mem_wb.rd = rd as usize;
            }
        } else if line.starts_with("CTRL_REGWRITE=") {
            let regwrite = flag_value(line, "CTRL_REGWRITE=");
            let memread = flag_value(line, "CTRL_MEMREAD=");
            let memwrite = flag_value(line, "CTRL_MEMWRITE=");
            if let (Some(rw), Some(mr), Some(mw), Some(snapshot)) =
                (regwrite, memread, memwrite, self.current.as_mut())
            {
                snapshot.control.regwrite = rw;
                snapshot.control.memread = mr;
                snapshot.control.memwrite = mw;
            }
        } else if line.starts_with("CTRL_BRANCH=") {
            let branch = flag_value(line, "CTRL_BRANCH=");
            let alusrc = flag_value(line, "CTRL_ALUSRC=");
            let memtoreg = flag_value(line, "CTRL_MEMTOREG=");
            if let (Some(br), Some(asrc), Some(mtr), Some(snapshot)) =
                (branch, alusrc, memtoreg, self.current.as_mut())
            {
                snapshot.control.branch = br;
                snapshot.control.alusrc = asrc;
                snapshot.control.memtoreg = mtr;
            }
        }
        // Anything else: not part of the grammar, skipped.
    }

    /// Handles `CYCLE <n>: PC=0x<hex>`.
    ///
    /// Flushes the open snapshot and opens a new one carrying the running
    /// register file and a freshly pipeline-filled latch set. A malformed
    /// marker is treated as unrecognized and does not flush.
    fn consume_cycle_marker(&mut self, line: &str) {
        let Some(rest) = line.strip_prefix("CYCLE ") else {
            return;
        };
        let Some((num, tail)) = rest.split_once(':') else {
            return;
        };
        let Ok(cycle) = num.trim().parse::<u64>() else {
            return;
        };
        let Some(pc) = hex_value(tail, "PC=0x") else {
            return;
        };

        self.flush();
        self.current = Some(CycleSnapshot::pipeline_filled(cycle, pc, self.regs));
    }

    /// Handles `REG[<idx>]=0x<hex>`, possibly several per line.
    ///
    /// Updates both the running register file and the open snapshot, so a
    /// register line appearing after its cycle marker is visible in that
    /// cycle's record. Indices beyond the register count are ignored.
    fn consume_registers(&mut self, line: &str) {
        for (idx, val) in indexed_values(line, "REG[") {
            if idx >= REGISTER_COUNT {
                continue;
            }
            self.regs[idx] = val;
            if let Some(snapshot) = self.current.as_mut() {
                snapshot.registers[idx] = val;
            }
        }
    }

    /// Handles `MEM[<byteaddr>]=0x<hex>`, possibly several per line.
    ///
    /// Byte addresses are divided by 4 to index words; only non-zero
    /// values are retained in the snapshot's sparse memory map.
    fn consume_memory(&mut self, line: &str) {
        let Some(snapshot) = self.current.as_mut() else {
            return;
        };
        for (byte_addr, val) in indexed_values(line, "MEM[") {
            if val != 0 {
                let _ = snapshot.memory.insert(byte_addr / 4, val);
            }
        }
    }

    /// Applies a two-hex-field latch update when both fields parse and a
    /// snapshot is open.
    fn update_latch_pair(
        &mut self,
        line: &str,
        first_key: &str,
        second_key: &str,
        apply: impl FnOnce(&mut CycleSnapshot, u32, u32),
    ) {
        let first = hex_value(line, first_key);
        let second = hex_value(line, second_key);
        if let (Some(a), Some(b), Some(snapshot)) = (first, second, self.current.as_mut()) {
            apply(snapshot, a, b);
        }
    }

    /// Moves the open snapshot, if any, onto the trace.
    fn flush(&mut self) {
        if let Some(snapshot) = self.current.take() {
            self.trace.push(snapshot);
        }
    }

    /// Flushes the final snapshot and returns the trace, or `EmptyTrace`
    /// if no cycle records were found.
    fn finish(mut self) -> Result<Trace, TraceError> {
        self.flush();
        if self.trace.is_empty() {
            Err(TraceError::EmptyTrace)
        } else {
            Ok(self.trace)
        }
    }
}

/// Reads the unsigned hex value following `key` in `line`, consuming hex
/// digits until the first non-hex character.
fn hex_value(line: &str, key: &str) -> Option<u32> {
    let start = line.find(key)? + key.len();
    let rest = &line[start..];
    let len = rest
        .find(|c: char| !c.is_ascii_hexdigit())
        .unwrap_or(rest.len());
    u32::from_str_radix(&rest[..len], 16).ok()
}

/// Reads the decimal flag following `key` in `line` as a boolean
/// (non-zero is true).
fn flag_value(line: &str, key: &str) -> Option<bool> {
    let start = line.find(key)? + key.len();
    let rest = &line[start..];
    let len = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    rest[..len].parse::<u32>().ok().map(|v| v != 0)
}

/// Scans every `KEY[<dec>]=0x<hex>` occurrence in a line, yielding
/// (index, value) pairs. Malformed occurrences are skipped individually.
fn indexed_values(line: &str, key: &str) -> Vec<(usize, u32)> {
    let mut pairs = Vec::new();
    for (pos, _) in line.match_indices(key) {
        let rest = &line[pos + key.len()..];
        let Some(close) = rest.find(']') else {
            continue;
        };
        let Ok(idx) = rest[..close].parse::<usize>() else {
            continue;
        };
        let Some(hex) = rest[close + 1..].strip_prefix("=0x") else {
            continue;
        };
        let len = hex
            .find(|c: char| !c.is_ascii_hexdigit())
            .unwrap_or(hex.len());
        let Ok(val) = u32::from_str_radix(&hex[..len], 16) else {
            continue;
        };
        pairs.push((idx, val));
    }
    pairs
}
