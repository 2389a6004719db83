//! Shared test infrastructure.



/// Mock devices.
pub mod mocks;
