/// Comparison flags.
pub mod flags;
