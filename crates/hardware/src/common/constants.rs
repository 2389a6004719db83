//! Global Machine Constants.
//!
//! This module defines machine-wide constants used across the emulator. It includes:
//! 1. **Memory Constants:** Address space size and reserved cells.
//! 2. **Register Constants:** Register count, reserved register roles, and reset values.
//! 3. **Instruction Constants:** Opcode byte field masks and shifts.
//! 4. **Interrupt Constants:** Vector table location and interrupt line assignments.

/// Size of the flat address space in bytes.
pub const MEMORY_SIZE: usize = 256;

/// Number of general-purpose registers.
pub const REGISTER_COUNT: usize = 8;

/// Register index holding the Interrupt Mask (IM).
pub const REG_IM: usize = 5;

/// Register index holding the Interrupt Status (IS).
pub const REG_IS: usize = 6;

/// Register index holding the Stack Pointer (SP).
pub const REG_SP: usize = 7;

/// Number of registers saved on interrupt entry (R0..R6).
pub const SAVED_REGISTER_COUNT: usize = 7;

/// Interrupt mask after reset: only the timer line is enabled.
pub const INITIAL_IM: u8 = 0b0000_0001;

/// Stack pointer after reset; the stack grows down from here.
pub const INITIAL_SP: u8 = 0xF4;

/// Memory cell receiving the payload byte of the last key press.
pub const KEY_PAYLOAD_ADDR: usize = 0xF4;

/// First address of the 8-entry interrupt vector table.
pub const VECTOR_TABLE_BASE: usize = 0xF8;

/// Number of interrupt lines (one IS/IM bit each).
pub const INTERRUPT_LINES: u8 = 8;

/// Interrupt line raised by the wall-clock timer.
pub const TIMER_INTERRUPT_LINE: u8 = 0;

/// Interrupt line raised by a key press.
pub const KEYBOARD_INTERRUPT_LINE: u8 = 1;

/// Key code that cancels the run instead of raising an interrupt.
pub const ESCAPE_KEY: u8 = 0x1B;

/// Shift of the operand-count field (`AA`) in an opcode byte.
pub const OPERAND_COUNT_SHIFT: u8 = 6;

/// Shift of the sets-PC flag (`B`) in an opcode byte.
pub const SETS_PC_SHIFT: u8 = 4;

/// Shift of the ALU flag (`C`) in an opcode byte.
pub const ALU_SHIFT: u8 = 5;

/// Mask of the 4-bit instruction code (`DDDD`).
pub const INSTRUCTION_CODE_MASK: u8 = 0x0F;

/// Largest operand count encodable in the `AA` field.
pub const MAX_OPERANDS: usize = 3;

/// Width of a conditional jump or `INT` (opcode + register operand).
pub const FLOW_INSTRUCTION_WIDTH: usize = 2;
