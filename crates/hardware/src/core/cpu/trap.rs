//! Interrupt Handling Logic.
//!
//! This module implements interrupt entry and exit. It performs the following:
//! 1. **Raising:** Sets a line's bit in IS (R6).
//! 2. **Dispatch:** Picks the lowest pending line enabled by IM (R5), saves
//!    PC, FL, and R0..R6 on the stack, and jumps through the vector table.
//! 3. **Return:** `IRET` restores R6..R0, FL, and PC in reverse order.

use tracing::debug;

use super::Cpu;
use crate::common::Fault;
use crate::common::constants::{INTERRUPT_LINES, SAVED_REGISTER_COUNT, VECTOR_TABLE_BASE};
use crate::core::arch::Flags;

impl Cpu {
    /// Marks `line` pending in IS. Lines outside 0..8 are ignored.
    pub const fn raise_interrupt(&mut self, line: u8) {
        if line < INTERRUPT_LINES {
            self.regs.set_is(self.regs.is() | (1 << line));
        }
    }

    /// Enters the handler for the highest-priority pending interrupt, if any.
    ///
    /// Returns the serviced line.
    ///
    /// # Errors
    ///
    /// Returns [`Fault::AddressOutOfRange`] if PC cannot be saved as a byte.
    pub fn dispatch_interrupt(&mut self) -> Result<Option<u8>, Fault> {
        let pending = self.regs.is();
        if pending == 0 {
            return Ok(None);
        }
        let masked = self.regs.im() & pending;
        if masked == 0 {
            return Ok(None);
        }

        let line = masked.trailing_zeros() as u8;
        self.regs.set_is(pending & !(1 << line));

        let return_pc = u8::try_from(self.pc).map_err(|_| Fault::AddressOutOfRange(self.pc))?;
        self.push(return_pc)?;
        self.push(self.fl.bits())?;
        for idx in 0..SAVED_REGISTER_COUNT {
            let val = self.regs.read(idx)?;
            self.push(val)?;
        }

        let handler = self.read_mem(VECTOR_TABLE_BASE + usize::from(line))?;
        debug!(line, from = self.pc, handler, "interrupt dispatched");
        self.pc = usize::from(handler);
        self.stats.interrupts_serviced += 1;
        Ok(Some(line))
    }

    /// Returns from an interrupt handler.
    ///
    /// # Errors
    ///
    /// Propagates memory and register faults.
    pub fn iret(&mut self) -> Result<(), Fault> {
        for idx in (0..SAVED_REGISTER_COUNT).rev() {
            let val = self.pop()?;
            self.regs.write(idx, val)?;
        }
        self.fl = Flags::from_bits(self.pop()?);
        self.pc = usize::from(self.pop()?);
        debug!(to = self.pc, "interrupt return");
        Ok(())
    }
}
