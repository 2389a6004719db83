//! Simulator: owns the CPU and drives runs to completion.
//!
//! A `Simulator` is an owned machine with `reset`/`load`/`run`. It performs:
//! 1. **Loading:** Parses and validates a program before touching machine state.
//! 2. **Running:** Ticks the CPU until `HLT`, the escape key, a stop request,
//!    the cycle limit, or a fault.
//! 3. **Teardown:** Detaches the keyboard and flushes the console after every run.

use std::io;
use std::path::Path;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use tracing::{debug, error, warn};

use crate::common::constants::MEMORY_SIZE;
use crate::common::{LoadError, SimError};
use crate::config::Config;
use crate::core::{Cpu, ExitReason};
use crate::sim::loader;
use crate::soc::System;
use crate::soc::devices::{Console, Keyboard};

/// Requests that a running simulator stop at the next cycle boundary.
///
/// Cloneable and sendable to other threads.
#[derive(Clone, Debug)]
pub struct StopHandle(Arc<AtomicBool>);

impl StopHandle {
    /// Requests a stop. The run ends with [`ExitReason::Stopped`].
    pub fn stop(&self) {
        self.0.store(true, Ordering::Release);
    }

    /// Whether a stop has been requested and not yet honoured.
    pub fn is_stop_requested(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }
}

/// Top-level simulator: the CPU plus run control.
#[derive(Debug)]
pub struct Simulator {
    /// CPU architectural state (registers, flags, bus, stats).
    pub cpu: Cpu,
    stop: Arc<AtomicBool>,
    max_cycles: Option<u64>,
    key_queue_depth: usize,
}

impl Simulator {
    /// Creates a simulator printing to standard output.
    pub fn new(config: &Config) -> Self {
        Self::with_system(System::new(config), config)
    }

    /// Creates a simulator printing to `console`.
    pub fn with_console(config: &Config, console: Console) -> Self {
        Self::with_system(System::with_console(config, console), config)
    }

    /// Creates a simulator around an already-built system.
    pub fn with_system(system: System, config: &Config) -> Self {
        Self {
            cpu: Cpu::new(system, config),
            stop: Arc::new(AtomicBool::new(false)),
            max_cycles: config.general.max_cycles,
            key_queue_depth: config.keyboard.queue_depth,
        }
    }

    /// Returns the machine to its power-on state and clears any pending stop request.
    pub fn reset(&mut self) {
        self.cpu.reset();
        self.stop.store(false, Ordering::Release);
        debug!("machine reset");
    }

    /// Resets the machine and copies `program` to address 0.
    ///
    /// # Errors
    ///
    /// Returns [`LoadError::ProgramTooLarge`] without touching machine state.
    pub fn load(&mut self, program: &[u8]) -> Result<(), LoadError> {
        if program.len() > MEMORY_SIZE {
            return Err(LoadError::ProgramTooLarge { len: program.len() });
        }
        self.reset();
        self.cpu.bus.memory.load(program)?;
        debug!(len = program.len(), "program loaded");
        Ok(())
    }

    /// Parses program text and loads it.
    ///
    /// # Errors
    ///
    /// Any parse error; the machine is untouched when parsing fails.
    pub fn load_text(&mut self, text: &str) -> Result<(), LoadError> {
        let program = loader::parse_program(text)?;
        self.load(&program)
    }

    /// Reads, parses, and loads a program file.
    ///
    /// # Errors
    ///
    /// Read or parse errors; the machine is untouched when either fails.
    pub fn load_file(&mut self, path: impl AsRef<Path>) -> Result<(), LoadError> {
        let program = loader::load_program_file(path)?;
        self.load(&program)
    }

    /// Attaches a keyboard for the next run.
    pub fn attach_keyboard(&mut self, keyboard: Keyboard) {
        self.cpu.bus.detach_keyboard();
        self.cpu.bus.keyboard = Some(keyboard);
    }

    /// Attaches a keyboard listening on standard input.
    ///
    /// # Errors
    ///
    /// Returns an error if the listener thread cannot be spawned.
    pub fn attach_stdin_keyboard(&mut self) -> io::Result<()> {
        let keyboard = Keyboard::stdin(self.key_queue_depth)?;
        self.attach_keyboard(keyboard);
        Ok(())
    }

    /// Returns a handle that can stop a run from another thread.
    pub fn stop_handle(&self) -> StopHandle {
        StopHandle(Arc::clone(&self.stop))
    }

    /// Advances the machine by one cycle.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::Fault`] carrying the PC of the faulting cycle.
    pub fn tick(&mut self) -> Result<(), SimError> {
        self.cpu.tick().map_err(|fault| SimError::Fault {
            pc: self.cpu.pc,
            fault,
        })
    }

    /// Runs until the machine stops.
    ///
    /// Whatever the outcome, the keyboard is detached (pending key events are
    /// discarded) and the console is flushed before returning.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::Fault`] if an instruction faults.
    pub fn run(&mut self) -> Result<ExitReason, SimError> {
        debug!(pc = self.cpu.pc, "run started");
        self.cpu.running = true;
        self.cpu.exit = None;
        self.cpu.stats.restart_clock();
        self.cpu.bus.timer.start();

        let result = self.run_loop();

        self.cpu.running = false;
        self.cpu.bus.timer.stop();
        self.cpu.bus.detach_keyboard();
        if let Err(err) = self.cpu.bus.console.flush() {
            warn!(%err, "console flush failed");
        }
        self.stop.store(false, Ordering::Release);

        match &result {
            Ok(reason) => debug!(?reason, cycles = self.cpu.stats.cycles, "run finished"),
            Err(err) => error!(%err, "run aborted"),
        }
        result
    }

    fn run_loop(&mut self) -> Result<ExitReason, SimError> {
        loop {
            if self.cpu.running {
                if self.stop.load(Ordering::Acquire) {
                    self.cpu.stop(ExitReason::Stopped);
                } else if self
                    .max_cycles
                    .is_some_and(|limit| self.cpu.stats.cycles >= limit)
                {
                    self.cpu.stop(ExitReason::CycleLimit);
                }
            }
            if !self.cpu.running {
                return Ok(self.cpu.take_exit().unwrap_or(ExitReason::Halted));
            }
            self.tick()?;
        }
    }
}
