mod common;

use bank_ocr::{accounts, decode_group, Account};
use proptest::prelude::*;

fn digits() -> impl Strategy<Value = [u8; 9]> {
    proptest::array::uniform9(0u8..=9)
}

proptest! {
    #[test]
    fn rendered_accounts_decode_to_themselves(digits in digits()) {
        let account = Account::from_digits(digits).unwrap();
        prop_assert_eq!(decode_group(1, &account.glyph_rows()).unwrap(), account);
    }

    #[test]
    fn positions_decode_independently(digits in digits(), shuffle in Just((0..9).collect::<Vec<usize>>()).prop_shuffle()) {
        let account = Account::from_digits(digits).unwrap();
        let mut permuted = [0; 9];
        for (to, &from) in shuffle.iter().enumerate() {
            permuted[to] = digits[from];
        }
        let decoded = decode_group(1, &Account::from_digits(permuted).unwrap().glyph_rows()).unwrap();
        for (to, &from) in shuffle.iter().enumerate() {
            prop_assert_eq!(decoded[to], account[from]);
        }
    }

    #[test]
    fn n_groups_yield_n_accounts(groups in proptest::collection::vec(digits(), 0..20), trailing in any::<bool>()) {
        let numbers: Vec<String> = groups.iter().map(|d| Account::from_digits(*d).unwrap().to_string()).collect();
        let refs: Vec<&str> = numbers.iter().map(String::as_str).collect();
        let lines = if trailing { common::lines_for(&refs) } else { common::lines_without_trailing_separator(&refs) };
        let decoded: Vec<String> = accounts(&lines).map(|a| a.unwrap().to_string()).collect();
        prop_assert_eq!(decoded, numbers);
    }
}
