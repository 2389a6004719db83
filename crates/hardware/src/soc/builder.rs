//! Machine construction and top-level `System` type.
//!
//! This module builds the machine's surroundings from configuration. It performs:
//! 1. **Memory setup:** Creates the zeroed 256-byte address space.
//! 2. **Device registration:** Instantiates the timer and the console.
//! 3. **Input attachment:** Holds the keyboard while a run is in progress.

use std::time::Duration;

use tracing::debug;

use crate::config::Config;
use crate::soc::devices::{Console, KeyEvent, Keyboard, Timer};
use crate::soc::memory::Memory;

/// Everything outside the CPU core: memory and devices.
#[derive(Debug)]
pub struct System {
    /// Main memory.
    pub memory: Memory,
    /// Interrupt line 0 source.
    pub timer: Timer,
    /// Interrupt line 1 source; attached for the duration of a run.
    pub keyboard: Option<Keyboard>,
    /// Output of `PRN`/`PRA`.
    pub console: Console,
}

impl System {
    /// Builds a system printing to standard output.
    pub fn new(config: &Config) -> Self {
        Self::with_console(config, Console::stdout())
    }

    /// Builds a system printing to `console`.
    pub fn with_console(config: &Config, console: Console) -> Self {
        let timer = Timer::new(
            Duration::from_millis(config.timer.interval_ms),
            config.timer.enabled,
        );
        Self::with_devices(timer, console)
    }

    /// Builds a system from already-constructed devices.
    pub fn with_devices(timer: Timer, console: Console) -> Self {
        Self {
            memory: Memory::new(),
            timer,
            keyboard: None,
            console,
        }
    }

    /// Polls the timer; `true` when an interval has elapsed.
    pub fn poll_timer(&mut self) -> bool {
        self.timer.poll()
    }

    /// Takes the next pending key event, if a keyboard is attached.
    pub fn poll_keyboard(&self) -> Option<KeyEvent> {
        self.keyboard.as_ref().and_then(Keyboard::try_next)
    }

    /// Detaches the keyboard from its listener and discards pending events.
    pub fn detach_keyboard(&mut self) {
        if let Some(mut keyboard) = self.keyboard.take() {
            let discarded = keyboard.shutdown();
            debug!(discarded, "keyboard detached");
        }
    }
}
