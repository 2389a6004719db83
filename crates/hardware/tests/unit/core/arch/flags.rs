//! # Flags Tests
//!
//! `CMP` must set exactly one of L, G, E, agreeing with the integer comparison.

use std::cmp::Ordering;

use ls8_core::core::arch::Flags;
use ls8_core::core::arch::flags::{FLAG_EQUAL, FLAG_GREATER, FLAG_LESS};
use pretty_assertions::assert_eq;
use proptest::prelude::*;

proptest! {
    #[test]
    fn prop_compare_sets_exactly_one_flag(a: u8, b: u8) {
        let flags = Flags::compare(a, b);
        prop_assert_eq!(flags.bits().count_ones(), 1);
        prop_assert_eq!(flags.ordering(), Some(a.cmp(&b)));
        prop_assert_eq!(flags.less(), a < b);
        prop_assert_eq!(flags.greater(), a > b);
        prop_assert_eq!(flags.equal(), a == b);
    }
}

#[test]
fn test_bit_positions() {
    assert_eq!(Flags::compare(1, 1).bits(), FLAG_EQUAL);
    assert_eq!(Flags::compare(2, 1).bits(), FLAG_GREATER);
    assert_eq!(Flags::compare(1, 2).bits(), FLAG_LESS);
    assert_eq!(FLAG_EQUAL, 0b001);
    assert_eq!(FLAG_GREATER, 0b010);
    assert_eq!(FLAG_LESS, 0b100);
}

#[test]
fn test_from_bits_masks_reserved_bits() {
    let flags = Flags::from_bits(0xF9);
    assert_eq!(flags.bits(), FLAG_EQUAL);
    assert_eq!(flags.ordering(), Some(Ordering::Equal));
}

#[test]
fn test_clear_has_no_ordering() {
    assert_eq!(Flags::CLEAR.ordering(), None);
    assert_eq!(Flags::default(), Flags::CLEAR);
}

#[test]
fn test_display() {
    assert_eq!(Flags::compare(0, 1).to_string(), "L--");
    assert_eq!(Flags::CLEAR.to_string(), "---");
    assert_eq!(Flags::from_bits(0b111).to_string(), "LGE");
}
