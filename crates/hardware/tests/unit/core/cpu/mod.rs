/// Flow control, loads, stores, and console output.
pub mod control;


/// Stack and memory access.
pub mod memory;
