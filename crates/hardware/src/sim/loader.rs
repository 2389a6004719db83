//! Program Loader.
//!
//! This module turns LS-8 program text into bytes. It performs:
//! 1. **Parsing:** One base-2 byte per line; blank lines and `#` comments are skipped.
//! 2. **Validation:** A malformed token or an oversized program rejects the whole text.
//! 3. **Discovery:** Lists the `.ls8` program files in a directory.
//!
//! Only the first whitespace-delimited token of a line is significant, so
//! trailing annotations such as `10000010 # LDI R0,8` are allowed.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::common::LoadError;
use crate::common::constants::MEMORY_SIZE;

/// File extension of LS-8 program files.
pub const PROGRAM_EXTENSION: &str = "ls8";

/// Parses program text into bytes.
///
/// # Errors
///
/// Returns [`LoadError::InvalidToken`] naming the first malformed line
/// (1-based), or [`LoadError::ProgramTooLarge`] for more than 256 bytes.
///
/// # Examples
///
/// ```
/// use ls8_core::sim::loader::parse_program;
///
/// let text = "# print 8\n10000010 # LDI R0,8\n00000000\n00001000\n\n00000001\n";
/// assert_eq!(parse_program(text).unwrap(), vec![0x82, 0x00, 0x08, 0x01]);
/// assert!(parse_program("10000010\n2\n").is_err());
/// ```
pub fn parse_program(text: &str) -> Result<Vec<u8>, LoadError> {
    let mut bytes = Vec::new();
    for (idx, line) in text.lines().enumerate() {
        let content = line.split('#').next().unwrap_or_default();
        let Some(token) = content.split_whitespace().next() else {
            continue;
        };
        bytes.push(parse_token(token).ok_or_else(|| LoadError::InvalidToken {
            line: idx + 1,
            token: token.to_string(),
        })?);
    }

    if bytes.len() > MEMORY_SIZE {
        return Err(LoadError::ProgramTooLarge { len: bytes.len() });
    }
    Ok(bytes)
}

/// Parses one base-2 literal of up to eight digits.
fn parse_token(token: &str) -> Option<u8> {
    if !token.bytes().all(|b| b == b'0' || b == b'1') {
        return None;
    }
    u8::from_str_radix(token, 2).ok()
}

/// Reads and parses a program file.
///
/// # Errors
///
/// Returns [`LoadError::Io`] if the file cannot be read, otherwise the
/// errors of [`parse_program`].
pub fn load_program_file(path: impl AsRef<Path>) -> Result<Vec<u8>, LoadError> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let bytes = parse_program(&text)?;
    debug!(path = %path.display(), len = bytes.len(), "program parsed");
    Ok(bytes)
}

/// Lists the `.ls8` files directly inside `dir`, sorted by path.
///
/// # Errors
///
/// Returns [`LoadError::Io`] if the directory cannot be read.
pub fn list_programs(dir: impl AsRef<Path>) -> Result<Vec<PathBuf>, LoadError> {
    let dir = dir.as_ref();
    let io_err = |source| LoadError::Io {
        path: dir.to_path_buf(),
        source,
    };

    let mut programs = Vec::new();
    for entry in fs::read_dir(dir).map_err(io_err)? {
        let path = entry.map_err(io_err)?.path();
        if path.is_file() && path.extension().is_some_and(|ext| ext == PROGRAM_EXTENSION) {
            programs.push(path);
        }
    }
    programs.sort();
    Ok(programs)
}
