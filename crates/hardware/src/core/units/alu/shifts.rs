//! ALU shift operations.
//!
//! Implements logical shift left and right. The shift amount is the full
//! value of the second register; shifting by 8 or more clears the result
//! instead of masking the amount.

use crate::isa::AluOp;

/// Executes a shift operation.
///
/// Returns `a` unchanged for non-shift opcodes.
pub fn execute(op: AluOp, a: u8, b: u8) -> u8 {
    let amount = u32::from(b);
    match op {
        AluOp::Shl => a.checked_shl(amount).unwrap_or(0),
        AluOp::Shr => a.checked_shr(amount).unwrap_or(0),
        _ => a,
    }
}
