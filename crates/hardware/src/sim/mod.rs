//! Program loading and run control.
//!
//! Provides the program text loader and the `Simulator`, which owns a
//! machine and drives it through reset, load, and run.

/// Program text parsing and discovery.
pub mod loader;

/// Owned machine with reset/load/run.
pub mod simulator;

pub use simulator::{Simulator, StopHandle};
