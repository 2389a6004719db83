//! Register File.
//!
//! This module provides the `RegisterFile` struct holding the eight 8-bit
//! general-purpose registers. It provides:
//! 1. **Bounds-checked Access:** Reads and writes fail with a fault outside `R0..=R7`.
//! 2. **Reserved Roles:** Named accessors for the IM, IS, and SP registers.
//! 3. **Observability:** A compact dump of all registers for tracing.

use std::fmt::Write as _;

use super::constants::{INITIAL_IM, INITIAL_SP, REG_IM, REG_IS, REG_SP, REGISTER_COUNT};
use super::error::Fault;

/// The eight general-purpose registers.
///
/// `R5`, `R6`, and `R7` double as the interrupt mask, interrupt status, and
/// stack pointer. Values are plain bytes; arithmetic on them wraps modulo 256.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RegisterFile {
    regs: [u8; REGISTER_COUNT],
}

impl Default for RegisterFile {
    fn default() -> Self {
        Self::new()
    }
}

impl RegisterFile {
    /// Creates a register file in the reset state.
    ///
    /// All registers are zero except IM (timer enabled) and SP (`0xF4`).
    pub fn new() -> Self {
        let mut regs = [0; REGISTER_COUNT];
        regs[REG_IM] = INITIAL_IM;
        regs[REG_SP] = INITIAL_SP;
        Self { regs }
    }

    /// Restores the reset state.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Reads a register.
    ///
    /// # Errors
    ///
    /// Returns [`Fault::RegisterOutOfRange`] when `idx` is not in `0..=7`.
    pub fn read(&self, idx: usize) -> Result<u8, Fault> {
        self.regs
            .get(idx)
            .copied()
            .ok_or(Fault::RegisterOutOfRange(idx))
    }

    /// Writes a register.
    ///
    /// # Errors
    ///
    /// Returns [`Fault::RegisterOutOfRange`] when `idx` is not in `0..=7`.
    pub fn write(&mut self, idx: usize, val: u8) -> Result<(), Fault> {
        let slot = self
            .regs
            .get_mut(idx)
            .ok_or(Fault::RegisterOutOfRange(idx))?;
        *slot = val;
        Ok(())
    }

    /// Interrupt Mask register.
    pub const fn im(&self) -> u8 {
        self.regs[REG_IM]
    }

    /// Interrupt Status register.
    pub const fn is(&self) -> u8 {
        self.regs[REG_IS]
    }

    /// Overwrites the Interrupt Status register.
    pub const fn set_is(&mut self, val: u8) {
        self.regs[REG_IS] = val;
    }

    /// Stack Pointer register.
    pub const fn sp(&self) -> u8 {
        self.regs[REG_SP]
    }

    /// Overwrites the Stack Pointer register.
    pub const fn set_sp(&mut self, val: u8) {
        self.regs[REG_SP] = val;
    }

    /// Returns a copy of all eight registers.
    pub const fn snapshot(&self) -> [u8; REGISTER_COUNT] {
        self.regs
    }

    /// Formats all registers as space-separated hex bytes (`R0` first).
    pub fn dump(&self) -> String {
        let mut out = String::with_capacity(REGISTER_COUNT * 3);
        for (i, val) in self.regs.iter().enumerate() {
            if i > 0 {
                out.push(' ');
            }
            let _ = write!(out, "{val:02X}");
        }
        out
    }
}
