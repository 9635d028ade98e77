//! Column names
//!
//! Spreadsheet columns are named in bijective base-26: the digits are
//! `A` (1) through `Z` (26) and there is no zero digit, so column 26 is `Z`
//! and column 27 is `AA`. Both functions here take and return 1-based column
//! numbers.

use crate::error::{Error, Result};
use crate::MAX_COLS;

const BASE: u32 = 26;

/// Number of digits `n` needs in `base` with ordinary positional counting.
///
/// Zero needs one digit. This is only used to size the buffer in
/// [`column_name`]; it can overshoot the bijective length by one.
pub fn digit_count(mut n: u32, base: u32) -> usize {
    if n == 0 {
        return 1;
    }

    let mut count = 0;
    while n != 0 {
        n /= base;
        count += 1;
    }
    count
}

/// Encode a 1-based column number as letters (1 = A, 27 = AA, 16384 = XFD).
///
/// Returns an empty string for 0.
///
/// ```
/// use sheetcopy_core::column::column_name;
///
/// assert_eq!(column_name(1), "A");
/// assert_eq!(column_name(26), "Z");
/// assert_eq!(column_name(27), "AA");
/// assert_eq!(column_name(16384), "XFD");
/// ```
pub fn column_name(mut n: u32) -> String {
    let mut digits = Vec::with_capacity(digit_count(n, BASE));

    while n > 0 {
        let digit = (n - 1) % BASE;
        digits.push(b'A' + digit as u8);
        n = (n - digit) / BASE;
    }

    digits.iter().rev().map(|&b| b as char).collect()
}

/// Decode column letters to a 1-based column number (A = 1, AA = 27).
///
/// Letters are case-insensitive. Anything outside `A-Z`/`a-z` is rejected,
/// as is a name past `XFD`.
pub fn column_number(letters: &str) -> Result<u16> {
    if letters.is_empty() {
        return Err(Error::InvalidAddress("empty column letters".into()));
    }

    let mut num: u32 = 0;
    for c in letters.chars() {
        if !c.is_ascii_alphabetic() {
            return Err(Error::InvalidAddress(format!(
                "invalid column letter '{}' in '{}'",
                c, letters
            )));
        }

        let digit = c.to_ascii_uppercase() as u32 - 'A' as u32 + 1;
        num = num
            .checked_mul(BASE)
            .and_then(|n| n.checked_add(digit))
            .filter(|&n| n <= MAX_COLS as u32)
            .ok_or_else(|| Error::ColumnOutOfRange(letters.to_string()))?;
    }

    Ok(num as u16)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_digit_count() {
        assert_eq!(digit_count(0, 10), 1);
        assert_eq!(digit_count(4, 2), 3);
        assert_eq!(digit_count(11, 16), 1);
        assert_eq!(digit_count(256, 16), 3);
        assert_eq!(digit_count(22, 16), 2);
        assert_eq!(digit_count(7, 8), 1);
        assert_eq!(digit_count(100, 10), 3);
        assert_eq!(digit_count(12, 26), 1);
        assert_eq!(digit_count(34, 26), 2);
    }

    #[test]
    fn test_column_name() {
        assert_eq!(column_name(0), "");
        assert_eq!(column_name(1), "A");
        assert_eq!(column_name(2), "B");
        assert_eq!(column_name(5), "E");
        assert_eq!(column_name(26), "Z");
        assert_eq!(column_name(27), "AA");
        assert_eq!(column_name(28), "AB");
        assert_eq!(column_name(52), "AZ");
        assert_eq!(column_name(676), "YZ");
        assert_eq!(column_name(702), "ZZ");
        assert_eq!(column_name(705), "AAC");
        assert_eq!(column_name(16384), "XFD");
    }

    #[test]
    fn test_column_number() {
        assert_eq!(column_number("A").unwrap(), 1);
        assert_eq!(column_number("B").unwrap(), 2);
        assert_eq!(column_number("E").unwrap(), 5);
        assert_eq!(column_number("Z").unwrap(), 26);
        assert_eq!(column_number("AB").unwrap(), 28);
        assert_eq!(column_number("AZ").unwrap(), 52);
        assert_eq!(column_number("YZ").unwrap(), 676);
        assert_eq!(column_number("ZZ").unwrap(), 702);
        assert_eq!(column_number("XFD").unwrap(), 16384);

        // Case insensitive
        assert_eq!(column_number("aa").unwrap(), 27);
        assert_eq!(column_number("aac").unwrap(), 705);
        assert_eq!(column_number("xFd").unwrap(), 16384);
    }

    #[test]
    fn test_column_number_errors() {
        assert!(matches!(column_number(""), Err(Error::InvalidAddress(_))));
        assert!(matches!(column_number("ф1"), Err(Error::InvalidAddress(_))));
        assert!(matches!(column_number("11"), Err(Error::InvalidAddress(_))));
        assert!(matches!(column_number("ЁЁ"), Err(Error::InvalidAddress(_))));
        assert!(matches!(
            column_number("XFE"),
            Err(Error::ColumnOutOfRange(_))
        ));
        assert!(matches!(
            column_number("ZZZZZZZZZZZZ"),
            Err(Error::ColumnOutOfRange(_))
        ));
    }

    proptest! {
        #[test]
        fn column_name_roundtrip(n in 1u32..=16384) {
            prop_assert_eq!(column_number(&column_name(n)).unwrap() as u32, n);
        }

        #[test]
        fn column_name_is_uppercase_letters(n in 1u32..=16384) {
            let name = column_name(n);
            prop_assert!(!name.is_empty() && name.len() <= 3);
            prop_assert!(name.bytes().all(|b| b.is_ascii_uppercase()));
        }
    }
}
