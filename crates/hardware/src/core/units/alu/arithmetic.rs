//! ALU arithmetic operations.
//!
//! Implements 8-bit addition, subtraction, multiplication, division,
//! remainder, increment, and decrement. Overflow wraps modulo 256.
//! A zero divisor is a fault rather than a result.

use crate::common::Fault;
use crate::isa::AluOp;

/// Executes an integer arithmetic operation.
///
/// # Arguments
///
/// * `op` - The ALU operation to perform (must be an arithmetic variant).
/// * `a`  - First operand.
/// * `b`  - Second operand (ignored by `Inc`/`Dec`).
///
/// # Errors
///
/// Returns [`Fault::DivisionByZero`] for `Div`/`Mod` when `b == 0`.
/// Non-arithmetic opcodes return `a` unchanged.
pub fn execute(op: AluOp, a: u8, b: u8) -> Result<u8, Fault> {
    Ok(match op {
        AluOp::Add => a.wrapping_add(b),
        AluOp::Sub => a.wrapping_sub(b),
        AluOp::Mul => a.wrapping_mul(b),
        AluOp::Div => a.checked_div(b).ok_or(Fault::DivisionByZero)?,
        AluOp::Mod => a.checked_rem(b).ok_or(Fault::DivisionByZero)?,
        AluOp::Inc => a.wrapping_add(1),
        AluOp::Dec => a.wrapping_sub(1),
        _ => a,
    })
}
