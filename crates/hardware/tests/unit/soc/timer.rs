//! # Timer Tests
//!
//! The timer is driven by a mocked clock so every tick is deterministic.

use std::time::{Duration, Instant};

use ls8_core::soc::devices::Timer;

use crate::common::mocks::clock::{MockWallClock, scripted_clock};

const SECOND: Duration = Duration::from_secs(1);

#[test]
fn test_fires_once_per_interval() {
    let clock = scripted_clock(Instant::now(), &[0, 500, 1000, 1200, 2000]);
    let mut timer = Timer::with_clock(Box::new(clock), SECOND, true);
    timer.start();
    assert!(!timer.poll());
    assert!(timer.poll());
    assert!(!timer.poll());
    assert!(timer.poll());
}

#[test]
fn test_interval_measured_from_last_tick() {
    let clock = scripted_clock(Instant::now(), &[0, 1500, 2000, 2500]);
    let mut timer = Timer::with_clock(Box::new(clock), SECOND, true);
    timer.start();
    assert!(timer.poll());
    assert!(!timer.poll());
    assert!(timer.poll());
}

#[test]
fn test_unstarted_timer_arms_on_first_poll() {
    let clock = scripted_clock(Instant::now(), &[0, 999, 1000]);
    let mut timer = Timer::with_clock(Box::new(clock), SECOND, true);
    assert!(!timer.poll());
    assert!(!timer.poll());
    assert!(timer.poll());
}

#[test]
fn test_stop_rearms() {
    let clock = scripted_clock(Instant::now(), &[0, 5000, 5500]);
    let mut timer = Timer::with_clock(Box::new(clock), SECOND, true);
    timer.start();
    timer.stop();
    assert!(!timer.poll());
    assert!(!timer.poll());
}

#[test]
fn test_disabled_timer_never_reads_clock() {
    let mut clock = MockWallClock::new();
    let _ = clock.expect_now().never();
    let mut timer = Timer::with_clock(Box::new(clock), SECOND, false);
    assert!(!timer.is_enabled());
    for _ in 0..10 {
        assert!(!timer.poll());
    }
}

#[test]
fn test_interval_accessor() {
    let timer = Timer::new(Duration::from_millis(250), true);
    assert_eq!(timer.interval(), Duration::from_millis(250));
    assert!(timer.is_enabled());
}
