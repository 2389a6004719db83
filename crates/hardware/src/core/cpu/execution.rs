//! Main Execution Loop.
//!
//! This module implements one machine cycle. It performs the following, in order:
//! 1. **Interrupt Dispatch:** Diverts to a handler if a masked-in line is pending.
//! 2. **Interrupt Sources:** Polls the timer, then drains queued key events.
//! 3. **Instruction Cycle:** Fetch, decode, operand fetch, route, and PC advance.
//! 4. **Observability:** Emits a trace event per instruction when tracing is on.

use tracing::{debug, trace};

use super::{Cpu, ExitReason};
use crate::common::Fault;
use crate::common::constants::{KEY_PAYLOAD_ADDR, KEYBOARD_INTERRUPT_LINE, TIMER_INTERRUPT_LINE};
use crate::isa::disasm::disassemble;
use crate::isa::{Operation, decode};
use crate::soc::devices::KeyEvent;

impl Cpu {
    /// Pre-tick: interrupt dispatch, then the timer and keyboard sources.
    ///
    /// An escape key clears `running`; the caller must not step afterwards.
    ///
    /// # Errors
    ///
    /// Propagates faults from interrupt entry or the key payload write.
    pub fn pre_tick(&mut self) -> Result<(), Fault> {
        let _ = self.dispatch_interrupt()?;

        if self.bus.poll_timer() {
            self.raise_interrupt(TIMER_INTERRUPT_LINE);
        }

        while let Some(event) = self.bus.poll_keyboard() {
            match event {
                KeyEvent::Press(key) => {
                    self.write_mem(KEY_PAYLOAD_ADDR, key)?;
                    self.raise_interrupt(KEYBOARD_INTERRUPT_LINE);
                    self.stats.keys_received += 1;
                }
                KeyEvent::Cancel => {
                    debug!("escape key received");
                    self.stop(ExitReason::Cancelled);
                    break;
                }
            }
        }
        Ok(())
    }

    /// Executes the instruction at PC.
    ///
    /// # Errors
    ///
    /// Returns the fault raised while fetching, decoding, or executing. PC is
    /// left at the faulting instruction.
    pub fn step(&mut self) -> Result<(), Fault> {
        self.stats.cycles += 1;

        let ir = self.read_mem(self.pc)?;
        let decoded = decode(ir);
        let operands = self.fetch_operands(&decoded)?;

        if self.trace {
            trace!(
                "{} | {}",
                self.trace_line(),
                disassemble(ir, &operands[..decoded.operand_count])
            );
        }

        let op = Operation::resolve(&decoded)?;
        self.execute(op, &operands)?;
        if !decoded.sets_pc {
            self.pc += decoded.width();
        }
        self.stats.record_retired(op);
        Ok(())
    }

    /// Runs one full cycle: `pre_tick`, then `step` if still running.
    ///
    /// # Errors
    ///
    /// Propagates faults from either phase.
    pub fn tick(&mut self) -> Result<(), Fault> {
        self.pre_tick()?;
        if self.running {
            self.step()?;
        }
        Ok(())
    }
}
