//! CPU Core Definition and Initialization.
//!
//! This module defines the central `Cpu` structure, which serves as the container for the
//! entire machine state. It coordinates the following:
//! 1. **State Management:** Maintains the register file, program counter, and flags.
//! 2. **Run State:** Tracks whether the machine is running and why it stopped.
//! 3. **System Integration:** Owns the `System` (memory and devices).
//! 4. **Observability:** Instruction tracing and run statistics.

/// Flow-control and branch instruction execution.
pub mod control;

/// Instruction cycle orchestration.
pub mod execution;

/// Memory and stack access.
pub mod memory;

/// Interrupt dispatch and return.
pub mod trap;

use std::fmt::Write as _;

use crate::common::RegisterFile;
use crate::config::Config;
use crate::core::arch::Flags;
use crate::soc::System;
use crate::stats::SimStats;

/// Why a run ended without a fault.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExitReason {
    /// `HLT` executed.
    Halted,
    /// The escape key was pressed.
    Cancelled,
    /// A stop was requested through a `StopHandle`.
    Stopped,
    /// The configured cycle limit was reached.
    CycleLimit,
}

/// Main CPU structure containing all machine state.
#[derive(Debug)]
pub struct Cpu {
    /// General purpose registers (R5..R7 are IM, IS, SP).
    pub regs: RegisterFile,
    /// Program Counter.
    pub pc: usize,
    /// Comparison flags.
    pub fl: Flags,
    /// Memory and devices.
    pub bus: System,
    /// Cleared when the run loop must stop.
    pub running: bool,
    /// Set once `running` is cleared without a fault.
    pub exit: Option<ExitReason>,
    /// Enable instruction tracing.
    pub trace: bool,
    /// Run statistics.
    pub stats: SimStats,
}

impl Cpu {
    /// Creates a CPU in its power-on state.
    ///
    /// # Arguments
    ///
    /// * `system` - Memory and devices.
    /// * `config` - The emulator configuration.
    pub fn new(system: System, config: &Config) -> Self {
        Self {
            regs: RegisterFile::new(),
            pc: 0,
            fl: Flags::CLEAR,
            bus: system,
            running: true,
            exit: None,
            trace: config.general.trace_instructions,
            stats: SimStats::default(),
        }
    }

    /// Returns the machine to its power-on state: registers, flags, memory,
    /// timer, and statistics. Any attached keyboard is detached.
    pub fn reset(&mut self) {
        self.regs.reset();
        self.pc = 0;
        self.fl = Flags::CLEAR;
        self.bus.memory.reset();
        self.bus.timer.stop();
        self.bus.detach_keyboard();
        self.running = true;
        self.exit = None;
        self.stats = SimStats::default();
    }

    /// Stops the run loop for a non-fault reason.
    pub const fn stop(&mut self, reason: ExitReason) {
        self.running = false;
        self.exit = Some(reason);
    }

    /// Retrieves the exit reason if the run has finished.
    pub const fn take_exit(&mut self) -> Option<ExitReason> {
        self.exit.take()
    }

    /// Renders one trace line: `PC | IR OP1 OP2 | R0 .. R7`.
    ///
    /// Bytes beyond the end of memory render as `--`.
    pub fn trace_line(&self) -> String {
        let mut out = format!("{:02X} |", self.pc);
        for offset in 0..3 {
            match self.bus.memory.read(self.pc + offset) {
                Ok(byte) => {
                    let _ = write!(out, " {byte:02X}");
                }
                Err(_) => out.push_str(" --"),
            }
        }
        let _ = write!(out, " | {}", self.regs.dump());
        out
    }
}
