//! SEDOL check digit.
//!
//! A SEDOL is six body characters followed by one check digit. Body
//! characters are read as base-36 digits (`0`-`9` then `A`=10 .. `Z`=35),
//! weighted positionally by [`SEDOL_WEIGHTS`], and the check digit is
//! `(10 - sum % 10) % 10`.
//!
//! ```rust
//! use figihover_core::identifier::{is_valid_sedol, sedol_check_digit};
//!
//! assert_eq!(sedol_check_digit("710889"), Ok('9'));
//! assert!(is_valid_sedol("7108899"));
//! assert!(!is_valid_sedol("7108891"));
//! ```

use crate::ValidationError;

use super::shape::is_restricted_char;

/// Positional weights applied to the six body characters.
pub const SEDOL_WEIGHTS: [u32; 6] = [1, 3, 1, 7, 3, 9];

const BODY_LEN: usize = 6;

/// Computes the check digit for a six character SEDOL body.
///
/// # Errors
///
/// Returns [`ValidationError::InvalidSedolFormat`] unless `body` is exactly
/// six characters from `[0-9BCDFGHJKLMNPQRSTVWXYZ]`.
pub fn sedol_check_digit(body: &str) -> Result<char, ValidationError> {
    let bytes = body.as_bytes();
    if bytes.len() != BODY_LEN || !bytes.iter().copied().all(is_restricted_char) {
        return Err(ValidationError::InvalidSedolFormat {
            value: body.to_owned(),
        });
    }

    let sum: u32 = bytes
        .iter()
        .zip(SEDOL_WEIGHTS)
        .map(|(&byte, weight)| base36_value(byte) * weight)
        .sum();

    let check = (10 - sum % 10) % 10;
    Ok(char::from(b'0' + check as u8))
}

/// Returns `true` when `candidate` is a seven character SEDOL whose last
/// character matches the check digit of the first six.
///
/// Never fails: malformed input of any kind is simply not a valid SEDOL.
pub fn is_valid_sedol(candidate: &str) -> bool {
    if candidate.len() != BODY_LEN + 1 || !candidate.is_char_boundary(BODY_LEN) {
        return false;
    }

    let (body, declared) = candidate.split_at(BODY_LEN);
    match sedol_check_digit(body) {
        Ok(expected) => declared.chars().eq(std::iter::once(expected)),
        Err(_) => false,
    }
}

fn base36_value(byte: u8) -> u32 {
    match byte {
        b'0'..=b'9' => u32::from(byte - b'0'),
        b'A'..=b'Z' => u32::from(byte - b'A') + 10,
        _ => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn computes_known_check_digits() {
        assert_eq!(sedol_check_digit("710889"), Ok('9'));
        assert_eq!(sedol_check_digit("B0YBKJ"), Ok('7'));
        assert_eq!(sedol_check_digit("000000"), Ok('0'));
    }

    #[test]
    fn accepts_matching_check_digit() {
        assert!(is_valid_sedol("7108899"));
        assert!(is_valid_sedol("B0YBKJ7"));
        assert!(is_valid_sedol("0263494"));
    }

    #[test]
    fn rejects_mismatched_check_digit() {
        assert!(!is_valid_sedol("7108891"));
        assert!(!is_valid_sedol("B0YBKJ1"));
    }

    #[test]
    fn rejects_vowels_and_lowercase_in_body() {
        let err = sedol_check_digit("A10889").expect_err("vowel must fail");
        assert!(matches!(err, ValidationError::InvalidSedolFormat { .. }));
        assert!(sedol_check_digit("b0ybkj").is_err());
        assert!(!is_valid_sedol("E108899"));
    }

    #[test]
    fn malformed_input_is_rejected_without_panicking() {
        for candidate in ["", "710889", "71088999", "7108 99", "71088é", "é108899", "710889é"] {
            assert!(!is_valid_sedol(candidate), "{candidate:?} must be rejected");
        }
    }

    #[test]
    fn every_restricted_body_yields_a_single_decimal_digit() {
        const ALPHABET: &[u8] = b"0123456789BCDFGHJKLMNPQRSTVWXYZ";
        for (i, &a) in ALPHABET.iter().enumerate() {
            for &b in ALPHABET.iter().skip(i % 7) {
                let body = String::from_utf8(vec![a, b, a, b, b, a]).expect("ascii");
                let digit = sedol_check_digit(&body).expect("restricted body");
                assert!(digit.is_ascii_digit());
                assert_eq!(sedol_check_digit(&body), Ok(digit));
            }
        }
    }
}
