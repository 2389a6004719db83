//! Arithmetic Logic Unit (ALU).
//!
//! This module implements the 8-bit integer ALU. Every result wraps modulo
//! 256. Operations are organized into submodules by category:
//! - [`arithmetic`]: Add, Sub, Mul, Div, Mod, Inc, Dec
//! - [`logic`]:      And, Or, Xor, Not
//! - [`shifts`]:     Shl, Shr
//!
//! `Cmp` writes no register; it produces a new flags value instead.

/// Integer arithmetic operations (add, subtract, multiply, divide).
pub mod arithmetic;

/// Bitwise logical operations (and, or, xor, not).
pub mod logic;

/// Shift operations (shl, shr).
pub mod shifts;

use crate::common::Fault;
use crate::core::arch::Flags;
use crate::isa::AluOp;

/// What an ALU operation produces.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AluResult {
    /// New value for the first operand register.
    Value(u8),
    /// New value for FL (from `CMP`).
    Flags(Flags),
}

/// Arithmetic Logic Unit for 8-bit register operations.
#[derive(Debug)]
pub struct Alu;

impl Alu {
    /// Executes an ALU operation.
    ///
    /// Single-operand operations (`INC`, `DEC`, `NOT`) ignore `b`.
    ///
    /// # Errors
    ///
    /// Returns [`Fault::DivisionByZero`] for `DIV` or `MOD` when `b` is zero.
    ///
    /// # Examples
    ///
    /// ```
    /// use ls8_core::core::units::alu::{Alu, AluResult};
    /// use ls8_core::isa::AluOp;
    ///
    /// // Wrapping addition
    /// let result = Alu::execute(AluOp::Add, 250, 10).unwrap();
    /// assert_eq!(result, AluResult::Value(4));
    ///
    /// // Shifting past the register width clears it
    /// let result = Alu::execute(AluOp::Shl, 0xFF, 8).unwrap();
    /// assert_eq!(result, AluResult::Value(0));
    ///
    /// // Division by zero is a fault
    /// assert!(Alu::execute(AluOp::Div, 1, 0).is_err());
    /// ```
    pub fn execute(op: AluOp, a: u8, b: u8) -> Result<AluResult, Fault> {
        let value = match op {
            AluOp::Add
            | AluOp::Sub
            | AluOp::Mul
            | AluOp::Div
            | AluOp::Mod
            | AluOp::Inc
            | AluOp::Dec => arithmetic::execute(op, a, b)?,

            AluOp::And | AluOp::Or | AluOp::Xor | AluOp::Not => logic::execute(op, a, b),

            AluOp::Shl | AluOp::Shr => shifts::execute(op, a, b),

            AluOp::Cmp => return Ok(AluResult::Flags(Flags::compare(a, b))),
        };
        Ok(AluResult::Value(value))
    }
}
