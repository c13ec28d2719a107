//! Program loading and trace resolution tests.

/// External-log-or-software-model selection.
pub mod resolve;
