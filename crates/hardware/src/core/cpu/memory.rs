//! Memory and Stack Access.
//!
//! Bounds-checked byte access to main memory plus the stack discipline built
//! on R7. SP arithmetic wraps modulo 256; because memory is exactly 256 bytes,
//! every SP value addresses a valid cell.

use super::Cpu;
use crate::common::Fault;
use crate::common::constants::MAX_OPERANDS;
use crate::isa::Decoded;

impl Cpu {
    /// Reads one byte of main memory.
    ///
    /// # Errors
    ///
    /// Returns [`Fault::AddressOutOfRange`] for addresses past the end of memory.
    pub fn read_mem(&self, addr: usize) -> Result<u8, Fault> {
        self.bus.memory.read(addr)
    }

    /// Writes one byte of main memory.
    ///
    /// # Errors
    ///
    /// Returns [`Fault::AddressOutOfRange`] for addresses past the end of memory.
    pub fn write_mem(&mut self, addr: usize, val: u8) -> Result<(), Fault> {
        self.bus.memory.write(addr, val)
    }

    /// Decrements SP, then stores `val` at the new top of stack.
    ///
    /// # Errors
    ///
    /// Propagates memory faults.
    pub fn push(&mut self, val: u8) -> Result<(), Fault> {
        let sp = self.regs.sp().wrapping_sub(1);
        self.regs.set_sp(sp);
        self.write_mem(usize::from(sp), val)
    }

    /// Loads the top of stack, then increments SP.
    ///
    /// # Errors
    ///
    /// Propagates memory faults.
    pub fn pop(&mut self) -> Result<u8, Fault> {
        let sp = self.regs.sp();
        let val = self.read_mem(usize::from(sp))?;
        self.regs.set_sp(sp.wrapping_add(1));
        Ok(val)
    }

    /// Reads the operand bytes that follow the instruction at PC.
    ///
    /// Unused slots are zero.
    ///
    /// # Errors
    ///
    /// Returns [`Fault::AddressOutOfRange`] if an operand lies past the end of memory.
    pub fn fetch_operands(&self, decoded: &Decoded) -> Result<[u8; MAX_OPERANDS], Fault> {
        let mut operands = [0; MAX_OPERANDS];
        for (i, slot) in operands.iter_mut().enumerate().take(decoded.operand_count) {
            *slot = self.read_mem(self.pc + 1 + i)?;
        }
        Ok(operands)
    }
}
