//! LS-8 Flags Register (FL).
//!
//! Holds the result of the most recent `CMP`. Exactly one of the three
//! comparison bits is set after a compare; the remaining five bits are
//! reserved and always zero.

use std::cmp::Ordering;
use std::fmt;

/// Equal bit (bit 0).
pub const FLAG_EQUAL: u8 = 0b001;

/// Greater-than bit (bit 1).
pub const FLAG_GREATER: u8 = 0b010;

/// Less-than bit (bit 2).
pub const FLAG_LESS: u8 = 0b100;

/// Mask of every meaningful FL bit.
pub const FLAG_MASK: u8 = FLAG_EQUAL | FLAG_GREATER | FLAG_LESS;

/// The flags register.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Flags(u8);

impl Flags {
    /// Flags with no comparison recorded.
    pub const CLEAR: Self = Self(0);

    /// Builds flags from a raw byte, dropping reserved bits.
    ///
    /// Used when FL is restored from the stack on `IRET`.
    pub const fn from_bits(bits: u8) -> Self {
        Self(bits & FLAG_MASK)
    }

    /// Raw register value.
    pub const fn bits(self) -> u8 {
        self.0
    }

    /// Flags recording the comparison of `a` against `b`.
    pub const fn compare(a: u8, b: u8) -> Self {
        if a < b {
            Self(FLAG_LESS)
        } else if a > b {
            Self(FLAG_GREATER)
        } else {
            Self(FLAG_EQUAL)
        }
    }

    /// Equal bit.
    pub const fn equal(self) -> bool {
        self.0 & FLAG_EQUAL != 0
    }

    /// Greater-than bit.
    pub const fn greater(self) -> bool {
        self.0 & FLAG_GREATER != 0
    }

    /// Less-than bit.
    pub const fn less(self) -> bool {
        self.0 & FLAG_LESS != 0
    }

    /// The recorded comparison, if exactly one comparison bit is set.
    pub const fn ordering(self) -> Option<Ordering> {
        match self.0 {
            FLAG_LESS => Some(Ordering::Less),
            FLAG_GREATER => Some(Ordering::Greater),
            FLAG_EQUAL => Some(Ordering::Equal),
            _ => None,
        }
    }
}

impl fmt::Display for Flags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let bit = |set: bool, c: char| if set { c } else { '-' };
        write!(
            f,
            "{}{}{}",
            bit(self.less(), 'L'),
            bit(self.greater(), 'G'),
            bit(self.equal(), 'E')
        )
    }
}
