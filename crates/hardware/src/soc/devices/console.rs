//! Console Output Device.
//!
//! Receives the output of `PRN` and `PRA`. Output is written through to the
//! underlying writer and flushed after every print so character-at-a-time
//! programs appear immediately.

use std::fmt;
use std::io::{self, Write};

/// Console output sink.
pub struct Console {
    out: Box<dyn Write + Send>,
}

impl fmt::Debug for Console {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Console").finish_non_exhaustive()
    }
}

impl Default for Console {
    fn default() -> Self {
        Self::stdout()
    }
}

impl Console {
    /// Creates a console writing to `out`.
    pub fn new(out: Box<dyn Write + Send>) -> Self {
        Self { out }
    }

    /// Creates a console writing to standard output.
    pub fn stdout() -> Self {
        Self::new(Box::new(io::stdout()))
    }

    /// Creates a console that discards everything.
    pub fn sink() -> Self {
        Self::new(Box::new(io::sink()))
    }

    /// Writes `value` as a decimal integer followed by a newline (`PRN`).
    ///
    /// # Errors
    ///
    /// Propagates write errors from the underlying writer.
    pub fn print_decimal(&mut self, value: u8) -> io::Result<()> {
        writeln!(self.out, "{value}")?;
        self.out.flush()
    }

    /// Writes `value` as a single Latin-1 character (`PRA`).
    ///
    /// # Errors
    ///
    /// Propagates write errors from the underlying writer.
    pub fn print_char(&mut self, value: u8) -> io::Result<()> {
        write!(self.out, "{}", char::from(value))?;
        self.out.flush()
    }

    /// Flushes the underlying writer.
    ///
    /// # Errors
    ///
    /// Propagates flush errors from the underlying writer.
    pub fn flush(&mut self) -> io::Result<()> {
        self.out.flush()
    }
}
