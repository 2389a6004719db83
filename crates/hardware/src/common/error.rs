//! Fault and Simulation Error definitions.
//!
//! This module defines the error handling for the emulator. It provides:
//! 1. **Faults:** Unrecoverable conditions raised while executing a single instruction.
//! 2. **Run Errors:** A fault tagged with the program counter it was raised at.
//! 3. **Load Errors:** Recoverable failures while reading or parsing a program file.
//! 4. **Config Errors:** Failures while reading or deserializing a configuration file.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Unrecoverable machine faults.
///
/// A fault terminates the fetch-decode-execute loop immediately. The machine
/// state is left as it was at the point of the fault so it can be inspected.
#[derive(Debug, Error)]
pub enum Fault {
    /// The byte routes to the ALU but names no ALU operation of that arity.
    ///
    /// The associated value is the instruction byte.
    #[error("unsupported ALU operation {0:#04x}")]
    UnsupportedAluOp(u8),

    /// The byte routes to the branch or flow tables but names no instruction.
    ///
    /// The associated value is the instruction byte.
    #[error("illegal instruction {0:#04x}")]
    IllegalInstruction(u8),

    /// A memory access fell outside `0..=0xFF`.
    #[error("memory address {0:#x} out of range")]
    AddressOutOfRange(usize),

    /// A register operand fell outside `0..=7`.
    #[error("register index {0} out of range")]
    RegisterOutOfRange(usize),

    /// `DIV` or `MOD` with a zero-valued divisor register.
    #[error("division by zero")]
    DivisionByZero,

    /// `INT` with a register value that does not name a line (valid values are 1..=8).
    #[error("invalid interrupt line value {0}")]
    InvalidInterruptLine(u8),

    /// `PRN`/`PRA` could not write to the console.
    #[error("console write failed: {0}")]
    Console(#[from] io::Error),
}

/// Errors that end a run abnormally.
#[derive(Debug, Error)]
pub enum SimError {
    /// A fault was raised while executing the instruction at `pc`.
    #[error("fault at pc {pc:#04x}: {fault}")]
    Fault {
        /// Program counter of the faulting instruction.
        pc: usize,
        /// The underlying fault.
        #[source]
        fault: Fault,
    },
}

/// Errors raised while loading a program.
///
/// These never corrupt machine state: parsing completes before the machine is reset.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The program file could not be opened or read.
    #[error("could not read program '{}': {source}", path.display())]
    Io {
        /// Path of the program file.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// A line's first token is not a base-2 byte literal.
    #[error("line {line}: invalid binary literal '{token}'")]
    InvalidToken {
        /// 1-based line number.
        line: usize,
        /// The offending token.
        token: String,
    },

    /// The program does not fit in the address space.
    #[error("program of {len} bytes does not fit in memory")]
    ProgramTooLarge {
        /// Number of bytes in the program.
        len: usize,
    },
}

/// Errors raised while reading a configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("could not read config '{}': {source}", path.display())]
    Io {
        /// Path of the configuration file.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// The configuration text is not valid JSON for [`Config`](crate::config::Config).
    #[error("invalid config: {0}")]
    Parse(#[from] serde_json::Error),
}
