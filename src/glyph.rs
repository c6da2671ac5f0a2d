use std::fmt;

use crate::candidates::{Candidates, ALL_DIGITS};
use crate::error::GlyphError;

pub const GLYPH_WIDTH: usize = 3;

/// Reference glyphs for the digits 0 to 9, as (top, middle, bottom) rows.
pub(crate) const GLYPHS: [[&str; 3]; 10] = [
    [" _ ", "| |", "|_|"],
    ["   ", "  |", "  |"],
    [" _ ", " _|", "|_ "],
    [" _ ", " _|", " _|"],
    ["   ", "|_|", "  |"],
    [" _ ", "|_ ", " _|"],
    [" _ ", "|_ ", "|_|"],
    [" _ ", "  |", "  |"],
    [" _ ", "|_|", "|_|"],
    [" _ ", "|_|", " _|"],
];

const TOP_FRAGMENTS: [(&str, Candidates); 2] = [
    (" _ ", Candidates::from_digits(&[0, 2, 3, 5, 6, 7, 8, 9])),
    ("   ", Candidates::from_digits(&[1, 4])),
];

const MIDDLE_FRAGMENTS: [(&str, Candidates); 5] = [
    ("| |", Candidates::from_digits(&[0])),
    ("  |", Candidates::from_digits(&[1, 7])),
    (" _|", Candidates::from_digits(&[2, 3])),
    ("|_|", Candidates::from_digits(&[4, 8, 9])),
    ("|_ ", Candidates::from_digits(&[5, 6])),
];

const BOTTOM_FRAGMENTS: [(&str, Candidates); 4] = [
    ("|_|", Candidates::from_digits(&[0, 6, 8])),
    ("  |", Candidates::from_digits(&[1, 4, 7])),
    ("|_ ", Candidates::from_digits(&[2])),
    (" _|", Candidates::from_digits(&[3, 5, 9])),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Row {
    Top,
    Middle,
    Bottom,
}

impl Row {
    pub const ALL: [Row; 3] = [Row::Top, Row::Middle, Row::Bottom];

    fn fragments(self) -> &'static [(&'static str, Candidates)] {
        match self {
            Row::Top => &TOP_FRAGMENTS,
            Row::Middle => &MIDDLE_FRAGMENTS,
            Row::Bottom => &BOTTOM_FRAGMENTS,
        }
    }
}

impl fmt::Display for Row {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Row::Top => "top",
            Row::Middle => "middle",
            Row::Bottom => "bottom",
        })
    }
}

/// Look up the digits a fragment is consistent with, given the row it sits in.
pub fn row_candidates(row: Row, fragment: &str) -> Result<Candidates, GlyphError> {
    row.fragments()
        .iter()
        .find(|&&(pattern, _)| pattern == fragment)
        .map(|&(_, candidates)| candidates)
        .ok_or_else(|| GlyphError::InvalidPattern { row, fragment: fragment.to_string() })
}

/// Decode one glyph from its top, middle and bottom fragments.
///
/// Each fragment narrows the candidate set; the glyph only decodes if the
/// intersection of all three leaves exactly one digit.
pub fn decode_digit(top: &str, middle: &str, bottom: &str) -> Result<u8, GlyphError> {
    let mut candidates = ALL_DIGITS;
    for (row, fragment) in Row::ALL.into_iter().zip([top, middle, bottom]) {
        candidates &= row_candidates(row, fragment)?;
    }
    candidates.single().ok_or(GlyphError::Unresolved(candidates))
}

pub fn glyph_rows(digit: u8) -> Option<[&'static str; 3]> {
    GLYPHS.get(digit as usize).copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_table_fragment_is_three_wide() {
        for row in Row::ALL {
            assert!(row.fragments().iter().all(|(pattern, _)| pattern.len() == GLYPH_WIDTH));
        }
    }

    #[test]
    fn reference_glyphs_agree_with_tables() {
        for (digit, rows) in GLYPHS.iter().enumerate() {
            for (row, fragment) in Row::ALL.into_iter().zip(rows) {
                assert!(row_candidates(row, fragment).unwrap().contains(digit as u8), "{row} row of {digit}");
            }
        }
    }
}
