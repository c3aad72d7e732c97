//! Shape predicates for the three identifier families.
//!
//! All predicates are exact, case sensitive and ASCII only.

use super::IdentifierKind;

/// `true` for `[0-9BCDFGHJKLMNPQRSTVWXYZ]`.
pub(crate) fn is_restricted_char(byte: u8) -> bool {
    byte.is_ascii_digit()
        || (byte.is_ascii_uppercase() && !matches!(byte, b'A' | b'E' | b'I' | b'O' | b'U'))
}

/// Two uppercase letters, nine uppercase alphanumerics, one digit.
pub fn is_isin_shape(token: &str) -> bool {
    let bytes = token.as_bytes();
    if bytes.len() != IdentifierKind::Isin.expected_len() {
        return false;
    }

    bytes[..2].iter().all(u8::is_ascii_uppercase)
        && bytes[2..11]
            .iter()
            .all(|byte| byte.is_ascii_uppercase() || byte.is_ascii_digit())
        && bytes[11].is_ascii_digit()
}

/// Seven characters from the restricted alphabet. Says nothing about the check digit.
pub fn is_sedol_shape(token: &str) -> bool {
    is_restricted_of_len(token, IdentifierKind::Sedol.expected_len())
}

/// Nine characters from the restricted alphabet.
pub fn is_cusip_shape(token: &str) -> bool {
    is_restricted_of_len(token, IdentifierKind::Cusip.expected_len())
}

pub(crate) fn matches_shape(kind: IdentifierKind, token: &str) -> bool {
    match kind {
        IdentifierKind::Isin => is_isin_shape(token),
        IdentifierKind::Sedol => is_sedol_shape(token),
        IdentifierKind::Cusip => is_cusip_shape(token),
    }
}

fn is_restricted_of_len(token: &str, len: usize) -> bool {
    token.len() == len && token.bytes().all(is_restricted_char)
}
