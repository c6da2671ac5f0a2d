//! Splits a stream of text lines into row-triple groups and decodes each
//! group into an [`Account`].
//!
//! Groups are three glyph rows followed by a blank separator line. The
//! separator is optional after the last group, and empty lines before the
//! first group are skipped. Between groups exactly one line is discarded;
//! anything after it is read as the next top row.
//!
//! Decoding is lazy: each call to `next` pulls one group and its separator
//! from the underlying lines and nothing more.

use std::io::{self, BufRead};
use std::iter::FusedIterator;
use std::mem;

use itertools::{izip, Itertools};
use log::{debug, trace, warn};

use crate::account::{Account, ACCOUNT_DIGITS};
use crate::error::{OcrError, Result};
use crate::glyph::{decode_digit, Row, GLYPH_WIDTH};

pub const ROW_WIDTH: usize = ACCOUNT_DIGITS * GLYPH_WIDTH;

enum State<S> {
    Start,
    HaveTop(S),
    HaveTriple([S; 3]),
    /// A group was just emitted; the next line, if any, is its separator.
    DiscardSeparator,
    Done,
}

/// Iterator of decoded accounts over a line source.
///
/// The first error is yielded once, after which the iterator is finished.
/// Accounts yielded before the error are unaffected.
pub struct Accounts<I, S> {
    lines: I,
    state: State<S>,
    group: usize,
    line_number: usize,
}

impl<I, S> Accounts<I, S>
where
    I: Iterator<Item = io::Result<S>>,
    S: AsRef<str>,
{
    pub fn new(lines: I) -> Self {
        Self { lines, state: State::Start, group: 0, line_number: 0 }
    }

    /// Number of groups started so far, counting the one being decoded.
    pub fn groups_seen(&self) -> usize {
        self.group
    }

    fn pull(&mut self) -> Result<Option<S>> {
        let line = self.lines.next().transpose().map_err(|source| OcrError::Io { line: self.line_number + 1, source })?;
        match line {
            Some(line) => {
                self.line_number += 1;
                trace!("line {}: [{}]", self.line_number, line.as_ref());
                Ok(Some(line))
            }
            None => Ok(None),
        }
    }

    /// Advance the state machine by one transition. Returns an item when one
    /// is ready, `None` to keep going.
    fn step(&mut self) -> Option<Result<Option<Account>>> {
        match mem::replace(&mut self.state, State::Done) {
            State::Start => match self.pull() {
                Ok(Some(line)) if self.group == 0 && line.as_ref().is_empty() => {
                    debug!("skipping empty line {} before the first group", self.line_number);
                    self.state = State::Start;
                    None
                }
                Ok(Some(top)) => {
                    self.group += 1;
                    self.state = State::HaveTop(top);
                    None
                }
                Ok(None) => Some(Ok(None)),
                Err(e) => Some(Err(e)),
            },
            State::HaveTop(top) => {
                let middle = match self.pull() {
                    Ok(Some(line)) => line,
                    Ok(None) => return Some(Err(OcrError::TruncatedGroup { group: self.group, rows: 1 })),
                    Err(e) => return Some(Err(e)),
                };
                let bottom = match self.pull() {
                    Ok(Some(line)) => line,
                    Ok(None) => return Some(Err(OcrError::TruncatedGroup { group: self.group, rows: 2 })),
                    Err(e) => return Some(Err(e)),
                };
                self.state = State::HaveTriple([top, middle, bottom]);
                None
            }
            State::HaveTriple(rows) => {
                let result = decode_group(self.group, &rows);
                if result.is_ok() {
                    self.state = State::DiscardSeparator;
                }
                Some(result.map(Some))
            }
            State::DiscardSeparator => match self.pull() {
                Ok(Some(line)) => {
                    if !line.as_ref().is_empty() {
                        warn!("discarding non-empty separator on line {}", self.line_number);
                    }
                    self.state = State::Start;
                    None
                }
                Ok(None) => Some(Ok(None)),
                Err(e) => Some(Err(e)),
            },
            State::Done => Some(Ok(None)),
        }
    }
}

impl<I, S> Iterator for Accounts<I, S>
where
    I: Iterator<Item = io::Result<S>>,
    S: AsRef<str>,
{
    type Item = Result<Account>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            match self.step() {
                None => continue,
                Some(Ok(Some(account))) => {
                    debug!("group {}: {}", self.group, account);
                    return Some(Ok(account));
                }
                Some(Ok(None)) => return None,
                Some(Err(e)) => {
                    debug!("stopping at group {}: {}", self.group, e);
                    return Some(Err(e));
                }
            }
        }
    }
}

impl<I, S> FusedIterator for Accounts<I, S>
where
    I: Iterator<Item = io::Result<S>>,
    S: AsRef<str>,
{
}

pub fn accounts<L, S>(lines: L) -> Accounts<impl Iterator<Item = io::Result<S>>, S>
where
    L: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    Accounts::new(lines.into_iter().map(Ok::<S, io::Error>))
}

/// Decode accounts from a reader, one text line at a time.
pub fn read_accounts<R: BufRead>(reader: R) -> Accounts<io::Lines<R>, String> {
    Accounts::new(reader.lines())
}

/// Decode one row-triple group. `group` is 1-based and only used for context.
pub fn decode_group<S: AsRef<str>>(group: usize, rows: &[S; 3]) -> Result<Account> {
    let mut fragments: [Vec<String>; 3] = Default::default();
    for ((row, line), slot) in Row::ALL.into_iter().zip(rows).zip(&mut fragments) {
        let chars = line.as_ref().chars().collect_vec();
        if chars.len() != ROW_WIDTH {
            return Err(OcrError::MalformedRowWidth { group, row, width: chars.len() });
        }
        *slot = chars.chunks(GLYPH_WIDTH).map(|chunk| chunk.iter().collect()).collect();
    }

    let mut digits = [0; ACCOUNT_DIGITS];
    for (position, (top, middle, bottom)) in izip!(&fragments[0], &fragments[1], &fragments[2]).enumerate() {
        digits[position] = decode_digit(top, middle, bottom).map_err(|e| e.at(group, position + 1))?;
    }
    Account::from_digits(digits)
}
