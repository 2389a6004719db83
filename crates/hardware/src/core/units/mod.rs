//! Execution units.
//!
//! The LS-8 has a single functional unit, the 8-bit ALU. Memory and stack
//! accesses are performed directly by the CPU.

/// Arithmetic Logic Unit for 8-bit register operations.
pub mod alu;
