//! Machine surroundings.
//!
//! This module organizes the components outside the CPU core: main memory,
//! the devices (timer, keyboard, console), and the `System` that owns them.

/// System construction from configuration.
pub mod builder;

/// Timer, keyboard, and console devices.
pub mod devices;

/// The 256-byte main memory.
pub mod memory;

pub use builder::System;
