//! Configuration system for the LS-8 emulator.
//!
//! This module defines the configuration structures used to parameterize a
//! machine. It provides:
//! 1. **Defaults:** Baseline constants (timer period, key queue depth).
//! 2. **Structures:** Config sections for general, timer, and keyboard settings.
//! 3. **Loading:** JSON deserialization from a string or a file.
//!
//! Every field is optional in JSON; missing fields take their defaults.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::common::ConfigError;

/// Default configuration constants for the emulator.
mod defaults {
    /// Real time between timer interrupts, in milliseconds (one second).
    pub const TIMER_INTERVAL_MS: u64 = 1000;

    /// Capacity of the key event queue between the listener and the CPU.
    pub const KEY_QUEUE_DEPTH: usize = 64;
}

/// Root configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// General run settings.
    #[serde(default)]
    pub general: GeneralConfig,
    /// Timer interrupt source.
    #[serde(default)]
    pub timer: TimerConfig,
    /// Keyboard interrupt source.
    #[serde(default)]
    pub keyboard: KeyboardConfig,
}

impl Config {
    /// Parses a configuration from JSON text.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed JSON or mistyped fields.
    pub fn from_json_str(text: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(text)?)
    }

    /// Reads and parses a JSON configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read, or
    /// [`ConfigError::Parse`] if it is not a valid configuration.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&text)
    }
}

/// General run settings.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GeneralConfig {
    /// Emit a trace event for every executed instruction.
    #[serde(default)]
    pub trace_instructions: bool,

    /// Stop the run after this many cycles (unbounded when absent).
    #[serde(default)]
    pub max_cycles: Option<u64>,
}

/// Timer interrupt settings.
#[derive(Debug, Clone, Deserialize)]
pub struct TimerConfig {
    /// Whether the timer raises interrupts at all.
    #[serde(default = "TimerConfig::default_enabled")]
    pub enabled: bool,

    /// Real time between ticks, in milliseconds.
    #[serde(default = "TimerConfig::default_interval_ms")]
    pub interval_ms: u64,
}

impl TimerConfig {
    /// The timer is on by default.
    const fn default_enabled() -> bool {
        true
    }

    /// Returns the default tick interval.
    const fn default_interval_ms() -> u64 {
        defaults::TIMER_INTERVAL_MS
    }
}

impl Default for TimerConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            interval_ms: defaults::TIMER_INTERVAL_MS,
        }
    }
}

/// Keyboard interrupt settings.
#[derive(Debug, Clone, Deserialize)]
pub struct KeyboardConfig {
    /// Capacity of the key event queue.
    #[serde(default = "KeyboardConfig::default_queue_depth")]
    pub queue_depth: usize,
}

impl KeyboardConfig {
    /// Returns the default queue capacity.
    const fn default_queue_depth() -> usize {
        defaults::KEY_QUEUE_DEPTH
    }
}

impl Default for KeyboardConfig {
    fn default() -> Self {
        Self {
            queue_depth: defaults::KEY_QUEUE_DEPTH,
        }
    }
}
