//! Core processor implementation.
//!
//! This module contains the CPU (state, instruction cycle, interrupts), the
//! architectural flags, and the ALU.

/// Architecture-specific components (flags register).
pub mod arch;

/// CPU core implementation and execution orchestration.
pub mod cpu;

/// Execution units (ALU).
pub mod units;

pub use self::cpu::{Cpu, ExitReason};
