//! Run orchestration and the external-trace fallback policy.
//!
//! Two producers can generate a trace: an external hardware-level
//! simulator whose log we parse, and the in-crate software pipeline
//! model. [`resolve_trace`] encodes the preference order: a parseable
//! external log always wins, and anything else (no log, or a log with no
//! cycle records) falls back to the software model with a warning on
//! stdout.

use crate::common::TraceError;
use crate::config::Config;
use crate::core::pipeline::engine::PipelineEngine;
use crate::sim::loader::load_program;
use crate::trace::parser::TraceParser;
use crate::trace::snapshot::Trace;

/// Runs the software pipeline model over hex program text.
///
/// Loads the program, applies the fixed seed state, and steps the engine
/// for the configured number of cycles.
pub fn run_software(program: &str, config: &Config) -> Trace {
    let mut engine = PipelineEngine::with_config(load_program(program), config);
    engine.run(config.cycles)
}

/// Reconstructs a trace from an external simulator's log.
///
/// # Errors
///
/// Returns [`TraceError::EmptyTrace`] if the log contains no cycle
/// records.
pub fn trace_from_external_log(log: &str) -> Result<Trace, TraceError> {
    TraceParser::parse(log)
}

/// Produces a trace, preferring the external log when one parses.
///
/// When no log is supplied, or the supplied log yields no cycle records,
/// the software model runs instead and a warning is printed so the caller
/// can tell which producer the trace came from.
pub fn resolve_trace(external_log: Option<&str>, program: &str, config: &Config) -> Trace {
    let fallback = match external_log {
        Some(log) => match trace_from_external_log(log) {
            Ok(trace) => return trace,
            Err(err) => err,
        },
        None => TraceError::Unavailable,
    };

    println!("[Sim] WARNING: {fallback}; using software pipeline model");
    run_software(program, config)
}
