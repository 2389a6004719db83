
/// Disassembly text.
pub mod disasm;
