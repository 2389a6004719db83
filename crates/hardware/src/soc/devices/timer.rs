//! Wall-clock Interval Timer.
//!
//! The timer raises interrupt line 0 once per elapsed interval of real time
//! (one second by default). It is polled once per machine cycle: the current
//! time is compared against the instant of the last tick.
//!
//! Time is read through the [`Clock`] trait so tests can drive the timer
//! without sleeping.

use std::fmt;
use std::time::{Duration, Instant};

/// Source of the current time.
pub trait Clock: Send {
    /// Returns the current instant.
    fn now(&self) -> Instant;
}

/// [`Clock`] backed by [`Instant::now`].
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

/// Interval timer device.
pub struct Timer {
    /// Time source.
    clock: Box<dyn Clock>,
    /// Real time between ticks.
    interval: Duration,
    /// When false, `poll` never fires.
    enabled: bool,
    /// Instant of the last tick; `None` until the timer is started.
    last_tick: Option<Instant>,
}

impl fmt::Debug for Timer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Timer")
            .field("interval", &self.interval)
            .field("enabled", &self.enabled)
            .field("last_tick", &self.last_tick)
            .finish_non_exhaustive()
    }
}

impl Timer {
    /// Creates a timer reading the system clock.
    ///
    /// # Arguments
    ///
    /// * `interval` - Real time between ticks.
    /// * `enabled` - When false the timer never fires.
    pub fn new(interval: Duration, enabled: bool) -> Self {
        Self::with_clock(Box::new(SystemClock), interval, enabled)
    }

    /// Creates a timer reading an arbitrary clock.
    pub fn with_clock(clock: Box<dyn Clock>, interval: Duration, enabled: bool) -> Self {
        Self {
            clock,
            interval,
            enabled,
            last_tick: None,
        }
    }

    /// Marks the start of a run; the first tick is due one interval from now.
    pub fn start(&mut self) {
        self.last_tick = Some(self.clock.now());
    }

    /// Forgets the last tick.
    pub const fn stop(&mut self) {
        self.last_tick = None;
    }

    /// Checks whether an interval has elapsed since the last tick.
    ///
    /// Returns `true` at most once per call. A timer that has not been
    /// started starts now and does not fire.
    pub fn poll(&mut self) -> bool {
        if !self.enabled {
            return false;
        }
        let now = self.clock.now();
        match self.last_tick {
            Some(last) if now.saturating_duration_since(last) >= self.interval => {
                self.last_tick = Some(now);
                true
            }
            Some(_) => false,
            None => {
                self.last_tick = Some(now);
                false
            }
        }
    }

    /// Configured tick interval.
    pub const fn interval(&self) -> Duration {
        self.interval
    }

    /// Whether the timer can fire.
    pub const fn is_enabled(&self) -> bool {
        self.enabled
    }
}
