//! Instruction Set Architecture (ISA) Definitions.
//!
//! Contains the opcode table, instruction byte field extraction, decoding into
//! the three dispatch spaces (ALU, flow, branch), and the disassembler.

/// Instruction decoding into ALU, flow, and branch operations.
pub mod decode;

/// Instruction disassembler for debug tracing and diagnostics.
pub mod disasm;

/// Instruction byte structure and bit extraction utilities.
pub mod instruction;

/// Complete instruction bytes of every assigned instruction.
pub mod opcodes;

pub use decode::{AluOp, BranchOp, FlowOp, Operation, decode};
pub use instruction::{Decoded, InstructionBits};
