#![allow(dead_code)]

use bank_ocr::Account;

/// Glyph lines for the given account numbers, each group followed by a blank
/// separator line.
pub fn lines_for(numbers: &[&str]) -> Vec<String> {
    numbers
        .iter()
        .flat_map(|number| {
            let account: Account = number.parse().unwrap();
            let [top, middle, bottom] = account.glyph_rows();
            [top, middle, bottom, String::new()]
        })
        .collect()
}

/// Same as [`lines_for`] but without the separator after the last group.
pub fn lines_without_trailing_separator(numbers: &[&str]) -> Vec<String> {
    let mut lines = lines_for(numbers);
    lines.pop();
    lines
}

pub fn decode_all(lines: &[String]) -> Vec<String> {
    bank_ocr::accounts(lines).map(|account| account.unwrap().to_string()).collect()
}
