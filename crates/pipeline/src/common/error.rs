//! Trace reconstruction errors.
//!
//! Nothing inside the pipeline engine itself can fail: every decode and
//! ALU path has a defined zero default. The only fallible operation in the
//! crate is reconstructing a trace from an external simulator log, and the
//! caller's contract on failure is to fall back to the software model.

use thiserror::Error;

/// Failure to obtain a snapshot trace from an external simulator log.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TraceError {
    /// The log was parsed but yielded no cycle records.
    ///
    /// Either the external simulator produced garbage or the log was
    /// truncated before the first `CYCLE` marker.
    #[error("external trace contained no cycle records")]
    EmptyTrace,

    /// No external log was available (tooling missing or never invoked).
    #[error("no external trace available")]
    Unavailable,
}
