//! Run configuration for the pipeline model.
//!
//! The surrounding web layer supplies configuration as JSON; library users
//! can rely on `Config::default()`. Only two knobs exist: how many cycles
//! to simulate and whether to emit per-stage logging to stderr.

use serde::Deserialize;

/// Default configuration constants for the simulator.
mod defaults {
    /// Default run length in cycles.
    ///
    /// Twenty cycles is enough to show a short program filling, flowing
    /// through, and draining out of the five stages.
    pub const CYCLES: u64 = 20;
}

/// Run configuration.
///
/// # Examples
///
/// ```
/// use pipevis_core::Config;
///
/// let config: Config = serde_json::from_str(r#"{ "cycles": 8 }"#).unwrap();
/// assert_eq!(config.cycles, 8);
/// assert!(!config.trace);
/// ```
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct Config {
    /// Number of cycles to simulate.
    #[serde(default = "default_cycles")]
    pub cycles: u64,
    /// Emit one line per active pipeline stage to stderr.
    #[serde(default)]
    pub trace: bool,
}

/// Serde default hook for [`Config::cycles`].
fn default_cycles() -> u64 {
    defaults::CYCLES
}

impl Default for Config {
    fn default() -> Self {
        Self {
            cycles: defaults::CYCLES,
            trace: false,
        }
    }
}
