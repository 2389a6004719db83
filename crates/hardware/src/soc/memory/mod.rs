//! Main Memory.
//!
//! This module implements the 256-byte flat address space. It provides:
//! 1. **Storage:** One byte per address, `0x00..=0xFF`.
//! 2. **Bounds Checking:** Accesses outside the space fault instead of wrapping.
//! 3. **Program Loading:** Copies an instruction image to address 0.

use crate::common::constants::MEMORY_SIZE;
use crate::common::{Fault, LoadError};

/// Main memory of the machine.
#[derive(Clone, PartialEq, Eq)]
pub struct Memory {
    cells: [u8; MEMORY_SIZE],
}

impl std::fmt::Debug for Memory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let used = self.cells.iter().filter(|&&b| b != 0).count();
        f.debug_struct("Memory")
            .field("size", &MEMORY_SIZE)
            .field("nonzero_cells", &used)
            .finish()
    }
}

impl Default for Memory {
    fn default() -> Self {
        Self::new()
    }
}

impl Memory {
    /// Creates zero-filled memory.
    pub const fn new() -> Self {
        Self {
            cells: [0; MEMORY_SIZE],
        }
    }

    /// Zeroes every cell.
    pub fn reset(&mut self) {
        self.cells.fill(0);
    }

    /// Reads one byte.
    ///
    /// # Errors
    ///
    /// Returns [`Fault::AddressOutOfRange`] when `addr >= 256`.
    #[inline]
    pub fn read(&self, addr: usize) -> Result<u8, Fault> {
        self.cells
            .get(addr)
            .copied()
            .ok_or(Fault::AddressOutOfRange(addr))
    }

    /// Writes one byte.
    ///
    /// # Errors
    ///
    /// Returns [`Fault::AddressOutOfRange`] when `addr >= 256`.
    #[inline]
    pub fn write(&mut self, addr: usize, val: u8) -> Result<(), Fault> {
        let cell = self
            .cells
            .get_mut(addr)
            .ok_or(Fault::AddressOutOfRange(addr))?;
        *cell = val;
        Ok(())
    }

    /// Copies `program` to addresses `0..program.len()`.
    ///
    /// Cells past the end of the program are left untouched.
    ///
    /// # Errors
    ///
    /// Returns [`LoadError::ProgramTooLarge`] when the program exceeds 256 bytes;
    /// memory is not modified in that case.
    pub fn load(&mut self, program: &[u8]) -> Result<(), LoadError> {
        let dest = self
            .cells
            .get_mut(..program.len())
            .ok_or(LoadError::ProgramTooLarge { len: program.len() })?;
        dest.copy_from_slice(program);
        Ok(())
    }

    /// Read-only view of the whole address space.
    pub const fn as_slice(&self) -> &[u8] {
        &self.cells
    }
}
