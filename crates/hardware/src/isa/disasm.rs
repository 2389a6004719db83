//! Instruction Disassembler for LS-8.
//!
//! Converts an instruction byte and its operand bytes into a human-readable
//! mnemonic string for debug tracing, logging, and test diagnostics.
//!
//! # Usage
//!
//! ```
//! use ls8_core::isa::disasm::disassemble;
//! use ls8_core::isa::opcodes;
//!
//! assert_eq!(disassemble(opcodes::LDI, &[0, 8]), "LDI R0, 0x08");
//! assert_eq!(disassemble(opcodes::ADD, &[0, 1]), "ADD R0, R1");
//! assert_eq!(disassemble(0xFF, &[]), "??? 0xff");
//! ```

use crate::isa::decode::{BranchOp, Operation, decode};

/// Renders one instruction.
///
/// Every operand is a register index except the second operand of `LDI`,
/// which is an immediate. Bytes that do not resolve to an instruction render
/// as `??? 0xNN`. Missing operand bytes render as `?`.
pub fn disassemble(ir: u8, operands: &[u8]) -> String {
    let decoded = decode(ir);
    let Ok(op) = Operation::resolve(&decoded) else {
        return format!("??? {ir:#04x}");
    };

    let rendered: Vec<String> = (0..decoded.operand_count)
        .map(|i| match (op, i, operands.get(i)) {
            (_, _, None) => "?".to_string(),
            (Operation::Branch(BranchOp::Ldi), 1, Some(imm)) => format!("{imm:#04x}"),
            (_, _, Some(reg)) => format!("R{reg}"),
        })
        .collect();

    if rendered.is_empty() {
        op.mnemonic().to_string()
    } else {
        format!("{} {}", op.mnemonic(), rendered.join(", "))
    }
}
