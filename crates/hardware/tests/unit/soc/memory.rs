//! # Memory Tests

use ls8_core::common::{Fault, LoadError};
use ls8_core::soc::memory::Memory;
use pretty_assertions::assert_eq;

#[test]
fn test_starts_zeroed() {
    let mem = Memory::new();
    assert_eq!(mem.as_slice().len(), 256);
    assert!(mem.as_slice().iter().all(|&b| b == 0));
}

#[test]
fn test_read_write_bounds() {
    let mut mem = Memory::new();
    mem.write(0xFF, 7).unwrap();
    assert_eq!(mem.read(0xFF).unwrap(), 7);
    assert!(matches!(mem.read(0x100), Err(Fault::AddressOutOfRange(0x100))));
    assert!(matches!(
        mem.write(0x1000, 1),
        Err(Fault::AddressOutOfRange(0x1000))
    ));
}

#[test]
fn test_load_places_program_at_zero() {
    let mut mem = Memory::new();
    mem.load(&[1, 2, 3]).unwrap();
    assert_eq!(&mem.as_slice()[..4], &[1, 2, 3, 0]);
}

#[test]
fn test_load_full_memory() {
    let mut mem = Memory::new();
    mem.load(&[0xAA; 256]).unwrap();
    assert_eq!(mem.read(0xFF).unwrap(), 0xAA);
}

#[test]
fn test_load_too_large() {
    let mut mem = Memory::new();
    assert!(matches!(
        mem.load(&[0; 257]),
        Err(LoadError::ProgramTooLarge { len: 257 })
    ));
}

#[test]
fn test_reset_zeroes() {
    let mut mem = Memory::new();
    mem.write(3, 9).unwrap();
    mem.reset();
    assert_eq!(mem.read(3).unwrap(), 0);
}
