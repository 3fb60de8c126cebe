//! coinview library
//!
//! Wires the engine to its two front ends: the TUI (in coinview-tui) and
//! the headless NDJSON runner below.

pub mod headless;

// Re-export main entry points
pub use coinview_tui::run;
pub use headless::runner::run_headless;
