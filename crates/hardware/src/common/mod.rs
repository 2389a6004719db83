//! Common utilities and types used throughout the LS-8 emulator.
//!
//! This module provides fundamental building blocks that are shared across all components
//! of the emulator. It includes:
//! 1. **Constants:** Memory layout, reserved registers, opcode fields, interrupt lines.
//! 2. **Error Handling:** Machine faults, run errors, load and config errors.
//! 3. **Register Management:** The bounds-checked eight-register file.

/// Common constants used throughout the emulator.
pub mod constants;

/// Error types and fault definitions.
pub mod error;

/// Register file implementation.
pub mod reg;

pub use error::{ConfigError, Fault, LoadError, SimError};
pub use reg::RegisterFile;
