use bank_ocr::{decode_digit, glyph_rows, row_candidates, Candidates, GlyphError, Row};

#[test]
fn every_reference_glyph_decodes_to_its_digit() {
    for digit in 0..=9u8 {
        let [top, middle, bottom] = glyph_rows(digit).unwrap();
        assert_eq!(decode_digit(top, middle, bottom), Ok(digit), "glyph for {digit}");
    }
}

#[test]
fn no_glyph_beyond_nine() {
    assert_eq!(glyph_rows(10), None);
}

#[test]
fn row_tables() {
    assert_eq!(row_candidates(Row::Top, " _ "), Ok(Candidates::from_digits(&[0, 2, 3, 5, 6, 7, 8, 9])));
    assert_eq!(row_candidates(Row::Top, "   "), Ok(Candidates::from_digits(&[1, 4])));
    assert_eq!(row_candidates(Row::Middle, "|_|"), Ok(Candidates::from_digits(&[4, 8, 9])));
    assert_eq!(row_candidates(Row::Bottom, "|_ "), Ok(Candidates::from_digits(&[2])));
}

#[test]
fn same_fragment_means_different_things_per_row() {
    assert_eq!(row_candidates(Row::Middle, "  |").unwrap().iter().collect::<Vec<_>>(), vec![1, 7]);
    assert_eq!(row_candidates(Row::Bottom, "  |").unwrap().iter().collect::<Vec<_>>(), vec![1, 4, 7]);
}

#[test]
fn fragment_outside_alphabet_is_rejected_with_row() {
    assert_eq!(
        decode_digit("X  ", "  |", "  |"),
        Err(GlyphError::InvalidPattern { row: Row::Top, fragment: "X  ".to_string() })
    );
    assert_eq!(
        decode_digit(" _ ", "| |", "| |"),
        Err(GlyphError::InvalidPattern { row: Row::Bottom, fragment: "| |".to_string() })
    );
}

#[test]
fn valid_fragments_from_different_digits_do_not_resolve() {
    // Top row of a 1 with the middle of a 0.
    let err = decode_digit("   ", "| |", "|_|").unwrap_err();
    assert_eq!(err, GlyphError::Unresolved(Candidates::empty()));
    assert_eq!(err.to_string(), "rows do not resolve to a single digit: candidates {}");
}

#[test]
fn fragments_must_be_exactly_three_wide() {
    assert!(matches!(decode_digit(" _", "| |", "|_|"), Err(GlyphError::InvalidPattern { row: Row::Top, .. })));
    assert!(matches!(decode_digit(" _ ", "| | ", "|_|"), Err(GlyphError::InvalidPattern { row: Row::Middle, .. })));
}
