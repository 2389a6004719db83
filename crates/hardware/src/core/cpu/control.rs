//! Instruction Execution.
//!
//! Executes a resolved [`Operation`] against the machine state:
//! - ALU operations read their register operands and write the first one (or FL for `CMP`).
//! - Branch-class operations leave PC to the cycle, which advances it afterwards.
//! - Flow operations set PC themselves, including the fall-through of a
//!   conditional jump that is not taken.

use super::{Cpu, ExitReason};
use crate::common::Fault;
use crate::common::constants::{FLOW_INSTRUCTION_WIDTH, INTERRUPT_LINES, MAX_OPERANDS};
use crate::core::units::alu::{Alu, AluResult};
use crate::isa::{AluOp, BranchOp, FlowOp, Operation};

type Operands = [u8; MAX_OPERANDS];

impl Cpu {
    /// Routes `op` to the ALU, branch, or flow executor.
    ///
    /// # Errors
    ///
    /// Propagates any fault raised by the instruction.
    pub fn execute(&mut self, op: Operation, operands: &Operands) -> Result<(), Fault> {
        match op {
            Operation::Alu(op) => self.execute_alu(op, operands),
            Operation::Branch(op) => self.execute_branch(op, operands),
            Operation::Flow(op) => self.execute_flow(op, operands),
        }
    }

    /// Reads the register named by an operand byte.
    fn reg(&self, operand: u8) -> Result<u8, Fault> {
        self.regs.read(usize::from(operand))
    }

    /// Executes an ALU instruction.
    ///
    /// # Errors
    ///
    /// Register index faults, or [`Fault::DivisionByZero`].
    pub fn execute_alu(&mut self, op: AluOp, operands: &Operands) -> Result<(), Fault> {
        let a = self.reg(operands[0])?;
        let b = if op.arity() == 2 {
            self.reg(operands[1])?
        } else {
            0
        };
        match Alu::execute(op, a, b)? {
            AluResult::Value(val) => self.regs.write(usize::from(operands[0]), val),
            AluResult::Flags(flags) => {
                self.fl = flags;
                Ok(())
            }
        }
    }

    /// Executes an instruction that does not set PC.
    ///
    /// # Errors
    ///
    /// Register and memory faults, or console write failures.
    pub fn execute_branch(&mut self, op: BranchOp, operands: &Operands) -> Result<(), Fault> {
        let [a, b, _] = *operands;
        match op {
            BranchOp::Nop => {}
            BranchOp::Hlt => self.stop(ExitReason::Halted),
            BranchOp::Ldi => self.regs.write(usize::from(a), b)?,
            BranchOp::Ld => {
                let addr = self.reg(b)?;
                let val = self.read_mem(usize::from(addr))?;
                self.regs.write(usize::from(a), val)?;
            }
            BranchOp::St => {
                let addr = self.reg(a)?;
                let val = self.reg(b)?;
                self.write_mem(usize::from(addr), val)?;
            }
            BranchOp::Push => {
                let val = self.reg(a)?;
                self.push(val)?;
            }
            BranchOp::Pop => {
                let val = self.pop()?;
                self.regs.write(usize::from(a), val)?;
            }
            BranchOp::Prn => {
                let val = self.reg(a)?;
                self.bus.console.print_decimal(val)?;
            }
            BranchOp::Pra => {
                let val = self.reg(a)?;
                self.bus.console.print_char(val)?;
            }
        }
        Ok(())
    }

    /// Executes an instruction that sets PC.
    ///
    /// # Errors
    ///
    /// Register and memory faults, [`Fault::InvalidInterruptLine`] for `INT`,
    /// or [`Fault::AddressOutOfRange`] when a return address does not fit in a byte.
    pub fn execute_flow(&mut self, op: FlowOp, operands: &Operands) -> Result<(), Fault> {
        match op {
            FlowOp::Call => {
                let target = self.reg(operands[0])?;
                let next = self.pc + FLOW_INSTRUCTION_WIDTH;
                let ret = u8::try_from(next).map_err(|_| Fault::AddressOutOfRange(next))?;
                self.push(ret)?;
                self.pc = usize::from(target);
            }
            FlowOp::Ret => self.pc = usize::from(self.pop()?),
            FlowOp::Int => {
                let line = self.reg(operands[0])?;
                if line == 0 || line > INTERRUPT_LINES {
                    return Err(Fault::InvalidInterruptLine(line));
                }
                self.raise_interrupt(line - 1);
                self.pc += FLOW_INSTRUCTION_WIDTH;
            }
            FlowOp::Iret => self.iret()?,
            FlowOp::Jmp => self.pc = usize::from(self.reg(operands[0])?),
            FlowOp::Jeq | FlowOp::Jne | FlowOp::Jgt | FlowOp::Jlt | FlowOp::Jle | FlowOp::Jge => {
                let target = self.reg(operands[0])?;
                if self.condition_holds(op) {
                    self.pc = usize::from(target);
                } else {
                    self.pc += FLOW_INSTRUCTION_WIDTH;
                }
            }
        }
        Ok(())
    }

    /// Evaluates a conditional jump against FL.
    const fn condition_holds(&self, op: FlowOp) -> bool {
        let fl = self.fl;
        match op {
            FlowOp::Jeq => fl.equal(),
            FlowOp::Jne => !fl.equal(),
            FlowOp::Jgt => fl.greater(),
            FlowOp::Jlt => fl.less(),
            FlowOp::Jle => fl.less() || fl.equal(),
            FlowOp::Jge => fl.greater() || fl.equal(),
            FlowOp::Call | FlowOp::Ret | FlowOp::Int | FlowOp::Iret | FlowOp::Jmp => true,
        }
    }
}
