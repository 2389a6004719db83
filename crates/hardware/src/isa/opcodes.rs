//! LS-8 Opcodes.
//!
//! Defines the complete instruction bytes of every assigned instruction, with
//! the `AABCDDDD` fields already combined.

/// No operation.
pub const NOP: u8 = 0b0000_0000;
/// Halt the machine.
pub const HLT: u8 = 0b0000_0001;
/// Load immediate: `LDI reg, value`.
pub const LDI: u8 = 0b1000_0010;
/// Load from memory: `LD reg_a, reg_b`.
pub const LD: u8 = 0b1000_0011;
/// Store to memory: `ST reg_a, reg_b`.
pub const ST: u8 = 0b1000_0100;
/// Push a register.
pub const PUSH: u8 = 0b0100_0101;
/// Pop into a register.
pub const POP: u8 = 0b0100_0110;
/// Print a register as a decimal integer.
pub const PRN: u8 = 0b0100_0111;
/// Print a register as a character.
pub const PRA: u8 = 0b0100_1000;

/// Add.
pub const ADD: u8 = 0b1010_0000;
/// Subtract.
pub const SUB: u8 = 0b1010_0001;
/// Multiply.
pub const MUL: u8 = 0b1010_0010;
/// Integer divide.
pub const DIV: u8 = 0b1010_0011;
/// Remainder.
pub const MOD: u8 = 0b1010_0100;
/// Increment.
pub const INC: u8 = 0b0110_0101;
/// Decrement.
pub const DEC: u8 = 0b0110_0110;
/// Compare.
pub const CMP: u8 = 0b1010_0111;
/// Bitwise AND.
pub const AND: u8 = 0b1010_1000;
/// Bitwise NOT.
pub const NOT: u8 = 0b0110_1001;
/// Bitwise OR.
pub const OR: u8 = 0b1010_1010;
/// Bitwise XOR.
pub const XOR: u8 = 0b1010_1011;
/// Shift left.
pub const SHL: u8 = 0b1010_1100;
/// Shift right.
pub const SHR: u8 = 0b1010_1101;

/// Call subroutine at register address.
pub const CALL: u8 = 0b0101_0000;
/// Return from subroutine.
pub const RET: u8 = 0b0001_0001;
/// Raise a software interrupt.
pub const INT: u8 = 0b0101_0010;
/// Return from interrupt handler.
pub const IRET: u8 = 0b0001_0011;
/// Unconditional jump.
pub const JMP: u8 = 0b0101_0100;
/// Jump if equal.
pub const JEQ: u8 = 0b0101_0101;
/// Jump if not equal.
pub const JNE: u8 = 0b0101_0110;
/// Jump if greater.
pub const JGT: u8 = 0b0101_0111;
/// Jump if less.
pub const JLT: u8 = 0b0101_1000;
/// Jump if less or equal.
pub const JLE: u8 = 0b0101_1001;
/// Jump if greater or equal.
pub const JGE: u8 = 0b0101_1010;
