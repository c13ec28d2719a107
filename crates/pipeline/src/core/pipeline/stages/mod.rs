//! The five pipeline stages.
//!
//! Each stage is a free function over the engine, invoked once per cycle
//! in reverse pipeline order. Downstream stages are gated by the declared
//! fill latencies in [`crate::common::constants`]: a stage only becomes
//! active once enough cycles have passed for real data to have reached its
//! input latch. That gating alone produces the textbook pipeline-fill
//! shape; there is no hazard detection, forwarding, or branch redirection.

/// Instruction Decode (ID) stage.
pub mod decode;
/// Execute (EX) stage.
pub mod execute;
/// Instruction Fetch (IF) stage.
pub mod fetch;
/// Memory Access (MEM) stage.
pub mod memory;
/// Write-back (WB) stage.
pub mod writeback;

pub use decode::id_stage;
pub use execute::ex_stage;
pub use fetch::if_stage;
pub use memory::mem_stage;
pub use writeback::wb_stage;
