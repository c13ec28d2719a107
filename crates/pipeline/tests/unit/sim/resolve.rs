//! Trace Resolution Tests.
//!
//! Verifies the producer preference: a parseable external log wins, and a
//! missing or empty log falls back to the software pipeline model.

use pipevis_core::Config;
use pipevis_core::common::TraceError;
use pipevis_core::sim::{resolve_trace, run_software, trace_from_external_log};

const PROGRAM: &str = "0x00700293\n";

#[test]
fn software_run_honors_the_configured_cycle_count() {
    let config = Config {
        cycles: 6,
        trace: false,
    };
    let trace = run_software(PROGRAM, &config);
    assert_eq!(trace.len(), 6);
    // ADDI x5, x0, 7 writes back in cycle 5.
    assert_eq!(trace.cycles()[4].registers[5], 7);
}

#[test]
fn external_log_parses_into_a_trace() {
    let trace = trace_from_external_log("CYCLE 1: PC=0x4\nREG[5]=0x7\n").unwrap();
    assert_eq!(trace.len(), 1);
    assert_eq!(trace.cycles()[0].registers[5], 7);
}

#[test]
fn empty_external_log_is_an_error() {
    assert!(matches!(
        trace_from_external_log(""),
        Err(TraceError::EmptyTrace)
    ));
}

#[test]
fn resolve_prefers_the_external_log() {
    let trace = resolve_trace(Some("CYCLE 9: PC=0x24\n"), PROGRAM, &Config::default());
    assert_eq!(trace.len(), 1);
    assert_eq!(trace.cycles()[0].cycle, 9);
}

#[test]
fn resolve_falls_back_when_no_log_is_supplied() {
    let trace = resolve_trace(None, PROGRAM, &Config::default());
    assert_eq!(trace.len(), 20);
}

#[test]
fn resolve_falls_back_on_an_unparsable_log() {
    let trace = resolve_trace(Some("no cycle records here\n"), PROGRAM, &Config::default());
    assert_eq!(trace.len(), 20);
    assert_eq!(trace.cycles()[4].registers[5], 7);
}
