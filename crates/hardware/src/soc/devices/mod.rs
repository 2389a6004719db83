//! Machine Devices.
//!
//! This module contains the devices attached to the LS-8: the console that
//! receives printed output and the two interrupt sources, the wall-clock
//! timer (line 0) and the keyboard (line 1).

/// Console output for `PRN` and `PRA`.
pub mod console;

/// Keyboard event channel and long-lived listener.
pub mod keyboard;

/// Wall-clock interval timer.
pub mod timer;

pub use console::Console;
pub use keyboard::{KeyEvent, KeySender, KeySource, Keyboard};
pub use timer::{Clock, SystemClock, Timer};
