//! # Disassembler Tests

use ls8_core::isa::disasm::disassemble;
use ls8_core::isa::opcodes::*;
use pretty_assertions::assert_eq;

#[test]
fn test_register_and_immediate_operands() {
    assert_eq!(disassemble(LDI, &[2, 0xF8]), "LDI R2, 0xf8");
    assert_eq!(disassemble(ST, &[0, 1]), "ST R0, R1");
    assert_eq!(disassemble(PRN, &[3]), "PRN R3");
}

#[test]
fn test_zero_operand_instructions() {
    assert_eq!(disassemble(HLT, &[]), "HLT");
    assert_eq!(disassemble(IRET, &[9, 9]), "IRET");
}

#[test]
fn test_missing_operand_renders_placeholder() {
    assert_eq!(disassemble(CALL, &[]), "CALL ?");
}

#[test]
fn test_unassigned_byte() {
    assert_eq!(disassemble(0xAE, &[0, 0]), "??? 0xae");
}
