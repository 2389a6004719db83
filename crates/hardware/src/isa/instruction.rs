//! Instruction byte field extraction.
//!
//! Provides the bit extraction trait and the `Decoded` structure for the
//! LS-8 opcode layout `AABCDDDD`:
//!
//! | Bits | Field | Meaning |
//! |------|-------|---------|
//! | 7..6 | `AA`  | operand count |
//! | 5    | `C`   | route through the ALU |
//! | 4    | `B`   | instruction sets PC itself |
//! | 3..0 | `DDDD`| instruction code |

use crate::common::constants::{
    ALU_SHIFT, INSTRUCTION_CODE_MASK, OPERAND_COUNT_SHIFT, SETS_PC_SHIFT,
};

/// Trait for extracting fields from an encoded instruction byte.
pub trait InstructionBits {
    /// Extracts the operand count (bits 6-7).
    ///
    /// Always in `0..=3`; no assigned instruction uses 3.
    fn operand_count(&self) -> usize;

    /// Extracts the sets-PC flag (bit 4).
    fn sets_pc(&self) -> bool;

    /// Extracts the ALU flag (bit 5).
    fn is_alu(&self) -> bool;

    /// Extracts the 4-bit instruction code (bits 0-3).
    fn code(&self) -> u8;
}

impl InstructionBits for u8 {
    #[inline(always)]
    fn operand_count(&self) -> usize {
        (self >> OPERAND_COUNT_SHIFT) as usize
    }

    #[inline(always)]
    fn sets_pc(&self) -> bool {
        (self >> SETS_PC_SHIFT) & 1 == 1
    }

    #[inline(always)]
    fn is_alu(&self) -> bool {
        (self >> ALU_SHIFT) & 1 == 1
    }

    #[inline(always)]
    fn code(&self) -> u8 {
        self & INSTRUCTION_CODE_MASK
    }
}

/// A classified instruction byte.
///
/// Decoding is total: every one of the 256 byte values produces a `Decoded`,
/// whether or not its code names an instruction.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Decoded {
    /// The raw instruction byte (IR).
    pub raw: u8,
    /// 4-bit instruction code.
    pub code: u8,
    /// Number of operand bytes following the opcode.
    pub operand_count: usize,
    /// The instruction manages PC itself; the loop must not auto-advance.
    pub sets_pc: bool,
    /// The instruction is dispatched to the ALU.
    pub is_alu: bool,
}

impl Decoded {
    /// Total width of the instruction in bytes (opcode + operands).
    pub const fn width(&self) -> usize {
        self.operand_count + 1
    }
}
