//! # bank-ocr
//!
//! Decodes account numbers drawn as seven-segment style glyphs made of
//! spaces, underscores and pipes. Each account is three 27-character rows,
//! nine glyphs side by side, followed by a blank line.
pub mod account;
pub mod candidates;
pub mod error;
pub mod glyph;
pub mod segmenter;

pub use account::{Account, ACCOUNT_DIGITS};
pub use candidates::{Candidates, ALL_DIGITS};
pub use error::{GlyphError, OcrError, Result};
pub use glyph::{decode_digit, glyph_rows, row_candidates, Row, GLYPH_WIDTH};
pub use segmenter::{accounts, decode_group, read_accounts, Accounts, ROW_WIDTH};
