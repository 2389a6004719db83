

/// Main memory bounds and loading.
pub mod memory;

/// Interval timer against a scripted clock.
pub mod timer;
