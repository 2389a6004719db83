//! LS-8 virtual machine library.
//!
//! This crate implements the LS-8, an 8-bit educational computer, with the following:
//! 1. **Core:** Register file, flags, the ALU, and the fetch/decode/execute cycle.
//! 2. **Interrupts:** A timer and a keyboard source dispatched through a vector table.
//! 3. **ISA:** Opcode bit layout, decoding, and a disassembler.
//! 4. **SoC:** 256 bytes of memory and the console, timer, and keyboard devices.
//! 5. **Simulation:** Program loader, run control, configuration, and statistics.

/// Common types and constants (errors, register file, memory map).
pub mod common;
/// Emulator configuration (defaults and JSON-deserialized sections).
pub mod config;
/// CPU core (arch, ALU, execution, interrupts).
pub mod core;
/// Instruction set (opcode layout, decode, disassembly).
pub mod isa;
/// Program loading and the `Simulator`.
pub mod sim;
/// Memory and devices.
pub mod soc;
/// Run statistics collection and reporting.
pub mod stats;

/// Root configuration type; use `Config::default()` or parse from JSON.
pub use crate::config::Config;
/// Main CPU type; holds registers, flags, bus, and stats.
pub use crate::core::{Cpu, ExitReason};
/// Owned machine with reset/load/run.
pub use crate::sim::{Simulator, StopHandle};
/// Memory and devices; construct with `System::new`.
pub use crate::soc::System;
