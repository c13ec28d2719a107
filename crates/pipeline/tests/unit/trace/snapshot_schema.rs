//! Snapshot JSON Schema Tests.
//!
//! The serialized snapshot is the contract consumed by the visualization
//! layer; these tests pin its shape so a refactor cannot silently change
//! field names or leak internal state into it.

use pipevis_core::PipelineEngine;
use pipevis_core::common::constants::{MIN_PROGRAM_WORDS, NOP_INSTRUCTION};
use pretty_assertions::assert_eq;
use serde_json::json;

use crate::common::addi;

fn first_snapshot_json() -> serde_json::Value {
    let mut imem = vec![addi(5, 0, 7)];
    imem.resize(MIN_PROGRAM_WORDS, NOP_INSTRUCTION);
    let mut engine = PipelineEngine::new(imem);
    let snap = engine.step();
    serde_json::to_value(&snap).unwrap()
}

#[test]
fn top_level_fields_are_present() {
    let v = first_snapshot_json();
    let obj = v.as_object().unwrap();
    for key in [
        "cycle", "pc", "registers", "if_id", "id_ex", "ex_mem", "mem_wb", "memory", "control",
    ] {
        assert!(obj.contains_key(key), "missing top-level key {key}");
    }
}

#[test]
fn registers_serialize_as_a_full_array() {
    let v = first_snapshot_json();
    let regs = v["registers"].as_array().unwrap();
    assert_eq!(regs.len(), 32);
    assert_eq!(regs[2], json!(100));
    assert_eq!(regs[17], json!(50));
}

#[test]
fn memory_serializes_as_a_sparse_object() {
    let v = first_snapshot_json();
    assert_eq!(v["memory"], json!({ "10": 123 }));
}

#[test]
fn ex_mem_latch_does_not_leak_the_instruction_word() {
    let v = first_snapshot_json();
    let ex_mem = v["ex_mem"].as_object().unwrap();
    assert!(!ex_mem.contains_key("inst"));
    for key in ["pc", "alu_result", "rd", "mem_write_data", "zero_flag"] {
        assert!(ex_mem.contains_key(key), "missing ex_mem key {key}");
    }
}

#[test]
fn control_serializes_all_six_booleans() {
    let v = first_snapshot_json();
    assert_eq!(
        v["control"],
        json!({
            "regwrite": false,
            "memread": false,
            "memwrite": false,
            "branch": false,
            "alusrc": false,
            "memtoreg": false,
        })
    );
}

#[test]
fn trace_serializes_as_a_bare_array() {
    let mut imem = vec![addi(5, 0, 7)];
    imem.resize(MIN_PROGRAM_WORDS, NOP_INSTRUCTION);
    let mut engine = PipelineEngine::new(imem);
    let trace = engine.run(3);

    let v: serde_json::Value = serde_json::from_str(&trace.to_json().unwrap()).unwrap();
    let cycles = v.as_array().unwrap();
    assert_eq!(cycles.len(), 3);
    assert_eq!(cycles[0]["cycle"], json!(1));
    assert_eq!(cycles[2]["cycle"], json!(3));
}
