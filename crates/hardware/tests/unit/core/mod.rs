/// Flags register.
pub mod arch;

/// CPU cycle, stack, flow control, and interrupts.
pub mod cpu;
