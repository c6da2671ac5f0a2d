//! Error types for OCR decoding.

use thiserror::Error;

use crate::candidates::Candidates;
use crate::glyph::Row;

/// Failure to decode a single glyph, before it is placed in a group.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GlyphError {
    #[error("invalid {row} row pattern [{fragment}]")]
    InvalidPattern { row: Row, fragment: String },

    /// The three rows together allow zero or several digits.
    #[error("rows do not resolve to a single digit: candidates {0}")]
    Unresolved(Candidates),
}

impl GlyphError {
    /// Attach the (1-based) group and digit position the glyph came from.
    pub fn at(self, group: usize, position: usize) -> OcrError {
        match self {
            GlyphError::InvalidPattern { row, fragment } => OcrError::InvalidFragmentPattern { group, position, row, fragment },
            GlyphError::Unresolved(candidates) => OcrError::AmbiguousOrEmptyDigit { group, position, candidates },
        }
    }
}

/// The primary error type for all operations in this crate.
#[derive(Debug, Error)]
pub enum OcrError {
    /// A 3-character slice matches no entry in its row-class table.
    #[error("group {group}, digit {position}: invalid {row} row pattern [{fragment}]")]
    InvalidFragmentPattern {
        group: usize,
        position: usize,
        row: Row,
        fragment: String,
    },

    /// The candidate sets of the three rows intersect to zero or several digits.
    #[error("group {group}, digit {position}: glyph does not resolve to a single digit (candidates {candidates})")]
    AmbiguousOrEmptyDigit {
        group: usize,
        position: usize,
        candidates: Candidates,
    },

    #[error("group {group} is truncated: expected 3 rows, found {rows}")]
    TruncatedGroup { group: usize, rows: usize },

    /// A row cannot hold nine 3-character digit slices.
    #[error("group {group}: {row} row is {width} characters wide, expected {expected}", expected = crate::ROW_WIDTH)]
    MalformedRowWidth { group: usize, row: Row, width: usize },

    #[error("invalid account number [{0}]")]
    InvalidAccountNumber(String),

    /// The line source failed while reading the given (1-based) line.
    #[error("I/O error reading line {line}: {source}")]
    Io { line: usize, source: std::io::Error },
}

pub type Result<T> = std::result::Result<T, OcrError>;
