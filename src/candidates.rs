use std::fmt;
use std::ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign};

use itertools::Itertools;

pub const ALL_DIGITS: Candidates = Candidates(0b11_1111_1111);

/// The set of digits still consistent with the glyph rows seen so far,
/// stored as a bitmask with bit `d` standing for digit `d`.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Candidates(u16);

impl Candidates {
    #[inline(always)]
    pub const fn empty() -> Self {
        Self(0)
    }

    /// Build a set by union of the given digits. Usable in constant tables.
    pub const fn from_digits(digits: &[u8]) -> Self {
        let mut mask: u16 = 0;
        let mut idx = 0;
        while idx < digits.len() {
            if digits[idx] <= 9 {
                mask |= 1u16 << digits[idx];
            }
            idx += 1;
        }
        Self(mask)
    }

    #[inline(always)]
    pub fn singleton(digit: u8) -> Self {
        Self(1u16.checked_shl(digit as u32).unwrap_or(0) & ALL_DIGITS.0)
    }

    #[inline(always)]
    pub fn contains(&self, digit: u8) -> bool {
        digit < 10 && self.0 & (1 << digit) != 0
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    #[inline(always)]
    pub fn count_ones(&self) -> u32 {
        self.0.count_ones()
    }

    /// The only member of the set, if there is exactly one.
    #[inline(always)]
    pub fn single(&self) -> Option<u8> {
        (self.count_ones() == 1).then(|| self.0.trailing_zeros() as u8)
    }

    #[inline(always)]
    pub fn iter(&self) -> Members {
        Members(self.0)
    }
}

/// Digits of a candidate set, lowest first.
pub struct Members(u16);

impl Iterator for Members {
    type Item = u8;

    #[inline(always)]
    fn next(&mut self) -> Option<u8> {
        let digit = (self.0 != 0).then(|| self.0.trailing_zeros() as u8)?;
        self.0 &= self.0 - 1;
        Some(digit)
    }
}

impl BitAnd for Candidates {
    type Output = Self;

    #[inline(always)]
    fn bitand(self, rhs: Self) -> Self {
        Self(self.0 & rhs.0)
    }
}

impl BitOr for Candidates {
    type Output = Self;

    #[inline(always)]
    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl BitAndAssign for Candidates {
    #[inline(always)]
    fn bitand_assign(&mut self, rhs: Self) {
        self.0 &= rhs.0;
    }
}

impl BitOrAssign for Candidates {
    #[inline(always)]
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

impl FromIterator<u8> for Candidates {
    fn from_iter<I: IntoIterator<Item = u8>>(digits: I) -> Self {
        digits.into_iter().fold(Self::empty(), |acc, d| acc | Self::singleton(d))
    }
}

impl IntoIterator for Candidates {
    type Item = u8;
    type IntoIter = Members;

    fn into_iter(self) -> Members {
        self.iter()
    }
}

impl fmt::Display for Candidates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{{}}}", self.iter().join(","))
    }
}

impl fmt::Debug for Candidates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Candidates{}", self)
    }
}
