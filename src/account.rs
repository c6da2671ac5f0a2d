use std::fmt;
use std::ops::Index;
use std::str::FromStr;

use itertools::Itertools;

use crate::error::{OcrError, Result};
use crate::glyph::GLYPHS;

pub const ACCOUNT_DIGITS: usize = 9;

#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Account([u8; ACCOUNT_DIGITS]);

impl Account {
    pub fn from_digits(digits: [u8; ACCOUNT_DIGITS]) -> Result<Self> {
        if digits.iter().all(|&d| d <= 9) {
            Ok(Self(digits))
        } else {
            Err(OcrError::InvalidAccountNumber(digits.iter().join(",")))
        }
    }

    pub fn digits(&self) -> impl Iterator<Item = &u8> {
        self.0.iter()
    }

    /// Render this account as the (top, middle, bottom) rows of its glyphs.
    pub fn glyph_rows(&self) -> [String; 3] {
        [0, 1, 2].map(|row| self.digits().map(|&d| GLYPHS[d as usize][row]).collect())
    }
}

impl Index<usize> for Account {
    type Output = u8;

    #[inline(always)]
    fn index(&self, index: usize) -> &u8 {
        &self.0[index]
    }
}

impl FromStr for Account {
    type Err = OcrError;

    fn from_str(s: &str) -> Result<Self> {
        let invalid = || OcrError::InvalidAccountNumber(s.to_string());
        let digits: Vec<u8> = s.chars().map(|c| c.to_digit(10).map(|d| d as u8)).collect::<Option<_>>().ok_or_else(invalid)?;
        let digits: [u8; ACCOUNT_DIGITS] = digits.try_into().map_err(|_| invalid())?;
        Ok(Self(digits))
    }
}

impl fmt::Display for Account {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for d in self.digits() {
            write!(f, "{}", d)?;
        }
        Ok(())
    }
}

impl fmt::Debug for Account {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Account({})", self)
    }
}
