//! LS-8 Instruction Decoder.
//!
//! This module splits an instruction byte into its fields and resolves the
//! fields into one of three operation spaces:
//! 1. **ALU:** Register arithmetic and comparison (`C = 1`).
//! 2. **Flow:** Instructions that set PC themselves (`B = 1`, `C = 0`).
//! 3. **Branch:** Everything else; PC advances past them automatically.
//!
//! Field extraction never fails. Resolution fails for codes that are not
//! assigned in their space, or whose operand count does not match the
//! instruction's arity.

use crate::common::Fault;
use crate::isa::instruction::{Decoded, InstructionBits};

/// Splits an instruction byte into its fields.
#[inline]
pub fn decode(ir: u8) -> Decoded {
    Decoded {
        raw: ir,
        code: ir.code(),
        operand_count: ir.operand_count(),
        sets_pc: ir.sets_pc(),
        is_alu: ir.is_alu(),
    }
}

/// ALU operations, keyed by instruction code.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AluOp {
    /// `a += b`
    Add,
    /// `a -= b`
    Sub,
    /// `a *= b`
    Mul,
    /// `a /= b`
    Div,
    /// `a %= b`
    Mod,
    /// `a += 1`
    Inc,
    /// `a -= 1`
    Dec,
    /// Compare `a` with `b` and set FL.
    Cmp,
    /// `a &= b`
    And,
    /// `a ^= 0xFF`
    Not,
    /// `a |= b`
    Or,
    /// `a ^= b`
    Xor,
    /// `a <<= b`
    Shl,
    /// `a >>= b`
    Shr,
}

impl AluOp {
    /// Looks up the operation assigned to an ALU instruction code.
    pub const fn from_code(code: u8) -> Option<Self> {
        Some(match code {
            0x0 => Self::Add,
            0x1 => Self::Sub,
            0x2 => Self::Mul,
            0x3 => Self::Div,
            0x4 => Self::Mod,
            0x5 => Self::Inc,
            0x6 => Self::Dec,
            0x7 => Self::Cmp,
            0x8 => Self::And,
            0x9 => Self::Not,
            0xA => Self::Or,
            0xB => Self::Xor,
            0xC => Self::Shl,
            0xD => Self::Shr,
            _ => return None,
        })
    }

    /// Number of register operands.
    pub const fn arity(self) -> usize {
        match self {
            Self::Inc | Self::Dec | Self::Not => 1,
            _ => 2,
        }
    }

    /// Assembly mnemonic.
    pub const fn mnemonic(self) -> &'static str {
        match self {
            Self::Add => "ADD",
            Self::Sub => "SUB",
            Self::Mul => "MUL",
            Self::Div => "DIV",
            Self::Mod => "MOD",
            Self::Inc => "INC",
            Self::Dec => "DEC",
            Self::Cmp => "CMP",
            Self::And => "AND",
            Self::Not => "NOT",
            Self::Or => "OR",
            Self::Xor => "XOR",
            Self::Shl => "SHL",
            Self::Shr => "SHR",
        }
    }
}

/// Non-flow instructions; PC advances past them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BranchOp {
    /// Unassigned code 0; consumes a cycle.
    Nop,
    /// Stop the run loop.
    Hlt,
    /// `reg := value`
    Ldi,
    /// `reg_a := memory[reg_b]`
    Ld,
    /// `memory[reg_a] := reg_b`
    St,
    /// Push a register onto the stack.
    Push,
    /// Pop the stack into a register.
    Pop,
    /// Print a register as decimal.
    Prn,
    /// Print a register as a character.
    Pra,
}

impl BranchOp {
    /// Looks up the instruction assigned to a branch-space code.
    pub const fn from_code(code: u8) -> Option<Self> {
        Some(match code {
            0x0 => Self::Nop,
            0x1 => Self::Hlt,
            0x2 => Self::Ldi,
            0x3 => Self::Ld,
            0x4 => Self::St,
            0x5 => Self::Push,
            0x6 => Self::Pop,
            0x7 => Self::Prn,
            0x8 => Self::Pra,
            _ => return None,
        })
    }

    /// Number of operand bytes.
    pub const fn arity(self) -> usize {
        match self {
            Self::Nop | Self::Hlt => 0,
            Self::Push | Self::Pop | Self::Prn | Self::Pra => 1,
            Self::Ldi | Self::Ld | Self::St => 2,
        }
    }

    /// Assembly mnemonic.
    pub const fn mnemonic(self) -> &'static str {
        match self {
            Self::Nop => "NOP",
            Self::Hlt => "HLT",
            Self::Ldi => "LDI",
            Self::Ld => "LD",
            Self::St => "ST",
            Self::Push => "PUSH",
            Self::Pop => "POP",
            Self::Prn => "PRN",
            Self::Pra => "PRA",
        }
    }
}

/// Flow-control instructions; each sets PC itself.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FlowOp {
    /// Push return address, jump to register.
    Call,
    /// Pop return address.
    Ret,
    /// Raise a software interrupt.
    Int,
    /// Restore the context saved on interrupt entry.
    Iret,
    /// Unconditional jump to register.
    Jmp,
    /// Jump if Equal.
    Jeq,
    /// Jump if not Equal.
    Jne,
    /// Jump if Greater.
    Jgt,
    /// Jump if Less.
    Jlt,
    /// Jump if Less or Equal.
    Jle,
    /// Jump if Greater or Equal.
    Jge,
}

impl FlowOp {
    /// Looks up the instruction assigned to a flow-space code.
    pub const fn from_code(code: u8) -> Option<Self> {
        Some(match code {
            0x0 => Self::Call,
            0x1 => Self::Ret,
            0x2 => Self::Int,
            0x3 => Self::Iret,
            0x4 => Self::Jmp,
            0x5 => Self::Jeq,
            0x6 => Self::Jne,
            0x7 => Self::Jgt,
            0x8 => Self::Jlt,
            0x9 => Self::Jle,
            0xA => Self::Jge,
            _ => return None,
        })
    }

    /// Number of operand bytes.
    pub const fn arity(self) -> usize {
        match self {
            Self::Ret | Self::Iret => 0,
            _ => 1,
        }
    }

    /// Assembly mnemonic.
    pub const fn mnemonic(self) -> &'static str {
        match self {
            Self::Call => "CALL",
            Self::Ret => "RET",
            Self::Int => "INT",
            Self::Iret => "IRET",
            Self::Jmp => "JMP",
            Self::Jeq => "JEQ",
            Self::Jne => "JNE",
            Self::Jgt => "JGT",
            Self::Jlt => "JLT",
            Self::Jle => "JLE",
            Self::Jge => "JGE",
        }
    }
}

/// A fully resolved instruction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Operation {
    /// Routed through the ALU.
    Alu(AluOp),
    /// Non-flow instruction.
    Branch(BranchOp),
    /// Flow-control instruction.
    Flow(FlowOp),
}

impl Operation {
    /// Resolves decoded fields into an operation.
    ///
    /// The ALU flag takes precedence over the sets-PC flag. ALU operations
    /// never set PC, so an ALU byte with the sets-PC flag is unsupported.
    ///
    /// # Errors
    ///
    /// * [`Fault::UnsupportedAluOp`] - ALU code unassigned or operand count mismatch.
    /// * [`Fault::IllegalInstruction`] - branch/flow code unassigned or operand count mismatch.
    pub fn resolve(decoded: &Decoded) -> Result<Self, Fault> {
        if decoded.is_alu {
            return match AluOp::from_code(decoded.code) {
                Some(op) if op.arity() == decoded.operand_count && !decoded.sets_pc => {
                    Ok(Self::Alu(op))
                }
                _ => Err(Fault::UnsupportedAluOp(decoded.raw)),
            };
        }
        if decoded.sets_pc {
            return match FlowOp::from_code(decoded.code) {
                Some(op) if op.arity() == decoded.operand_count => Ok(Self::Flow(op)),
                _ => Err(Fault::IllegalInstruction(decoded.raw)),
            };
        }
        match BranchOp::from_code(decoded.code) {
            Some(op) if op.arity() == decoded.operand_count => Ok(Self::Branch(op)),
            _ => Err(Fault::IllegalInstruction(decoded.raw)),
        }
    }

    /// Assembly mnemonic.
    pub const fn mnemonic(self) -> &'static str {
        match self {
            Self::Alu(op) => op.mnemonic(),
            Self::Branch(op) => op.mnemonic(),
            Self::Flow(op) => op.mnemonic(),
        }
    }
}
