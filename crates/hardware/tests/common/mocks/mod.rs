//! Mock devices.

/// Scripted clock for the timer.
pub mod clock;

/// In-memory console capture.
pub mod console;
