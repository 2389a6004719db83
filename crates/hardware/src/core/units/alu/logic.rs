//! ALU logical operations.
//!
//! Implements bitwise AND, OR, XOR, and NOT. `Not` is an XOR with `0xFF`.

use crate::isa::AluOp;

/// Mask used by `Not`.
const ALL_ONES: u8 = 0xFF;

/// Executes a logical operation.
///
/// Returns `a` unchanged for non-logic opcodes.
pub fn execute(op: AluOp, a: u8, b: u8) -> u8 {
    match op {
        AluOp::And => a & b,
        AluOp::Or => a | b,
        AluOp::Xor => a ^ b,
        AluOp::Not => a ^ ALL_ONES,
        _ => a,
    }
}
