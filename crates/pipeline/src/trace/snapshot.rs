//! The per-cycle snapshot record and the append-only trace.
//!
//! A `CycleSnapshot` is one cycle's complete observable state: registers,
//! all four latches, the sparse non-zero memory view, and the control
//! signals. Snapshots are immutable once created and are only ever
//! appended to a `Trace`, which serializes directly to the JSON the
//! visualization layer consumes.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::common::constants::REGISTER_COUNT;
use crate::core::pipeline::latches::{ExMemLatch, IdExLatch, IfIdLatch, MemWbLatch};
use crate::core::pipeline::signals::ControlSignals;

/// One cycle's complete observable state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CycleSnapshot {
    /// Cycle number, starting at 1.
    pub cycle: u64,
    /// Program counter after this cycle's fetch.
    pub pc: u32,
    /// Full copy of the register file.
    pub registers: [u32; REGISTER_COUNT],
    /// IF/ID latch contents.
    pub if_id: IfIdLatch,
    /// ID/EX latch contents.
    pub id_ex: IdExLatch,
    /// EX/MEM latch contents.
    pub ex_mem: ExMemLatch,
    /// MEM/WB latch contents.
    pub mem_wb: MemWbLatch,
    /// Sparse view of data memory: non-zero words keyed by word index.
    /// Never contains a zero-valued entry.
    pub memory: BTreeMap<usize, u32>,
    /// Control signals derived for this cycle.
    pub control: ControlSignals,
}

impl CycleSnapshot {
    /// Creates a pipeline-fill snapshot: the given cycle number, PC, and
    /// register contents, with default (no-op) latches, empty memory, and
    /// all-false control signals.
    ///
    /// This is the state a snapshot starts from while the trace parser
    /// accumulates latch and memory lines onto it.
    pub fn pipeline_filled(cycle: u64, pc: u32, registers: [u32; REGISTER_COUNT]) -> Self {
        Self {
            cycle,
            pc,
            registers,
            if_id: IfIdLatch::default(),
            id_ex: IdExLatch::default(),
            ex_mem: ExMemLatch::default(),
            mem_wb: MemWbLatch::default(),
            memory: BTreeMap::new(),
            control: ControlSignals::default(),
        }
    }
}

/// Ordered, append-only sequence of cycle snapshots spanning one run.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Trace {
    cycles: Vec<CycleSnapshot>,
}

impl Trace {
    /// Appends a snapshot to the trace.
    pub fn push(&mut self, snapshot: CycleSnapshot) {
        self.cycles.push(snapshot);
    }

    /// Number of snapshots in the trace.
    pub fn len(&self) -> usize {
        self.cycles.len()
    }

    /// Whether the trace contains no snapshots.
    pub fn is_empty(&self) -> bool {
        self.cycles.is_empty()
    }

    /// The snapshots as an ordered slice.
    pub fn cycles(&self) -> &[CycleSnapshot] {
        &self.cycles
    }

    /// Iterates over the snapshots in cycle order.
    pub fn iter(&self) -> std::slice::Iter<'_, CycleSnapshot> {
        self.cycles.iter()
    }

    /// Serializes the trace to the JSON document the visualization layer
    /// consumes: a bare array of cycle records.
    ///
    /// # Errors
    ///
    /// Returns any underlying `serde_json` serialization error.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

impl<'a> IntoIterator for &'a Trace {
    type Item = &'a CycleSnapshot;
    type IntoIter = std::slice::Iter<'a, CycleSnapshot>;

    fn into_iter(self) -> Self::IntoIter {
        self.cycles.iter()
    }
}
