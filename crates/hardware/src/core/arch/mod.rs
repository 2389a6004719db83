//! Architectural state beyond the general-purpose registers.

/// Comparison flags register (FL).
pub mod flags;

pub use flags::Flags;
