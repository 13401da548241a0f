use crate::alphabet::{letter_at, letter_index, ALPHABET_LEN};
use crate::error::{CaesarError, Result};

/// Reduce an arbitrary shift to its effective value in 0..26
///
/// Uses floored (Euclidean) modulo, so negative shifts land on their
/// positive equivalent: -3 normalizes to 23, not -3.
pub fn normalize_shift(shift: i64) -> u8 {
    shift.rem_euclid(ALPHABET_LEN as i64) as u8
}

/// Rotate every letter forward by `offset` positions within its own alphabet
/// Non-letters pass through unchanged
fn rotate(text: &str, offset: u8) -> String {
    text.chars()
        .map(|c| match letter_index(c) {
            Some((case, idx)) => letter_at(case, (idx + offset) % ALPHABET_LEN),
            None => c,
        })
        .collect()
}

/// Encrypt text with the given shift
///
/// Case is preserved and anything outside a-z/A-Z (digits, punctuation,
/// whitespace, non-Latin characters) is copied verbatim. The shift may be
/// any integer; it is normalized before use.
pub fn encrypt(text: &str, shift: i64) -> String {
    rotate(text, normalize_shift(shift))
}

/// Decrypt text that was encrypted with the given shift
///
/// Applies the additive complement of the normalized shift, which is the
/// same as encrypting with the negated shift but cannot overflow on
/// i64::MIN.
pub fn decrypt(text: &str, shift: i64) -> String {
    let offset = normalize_shift(shift);
    rotate(text, (ALPHABET_LEN - offset) % ALPHABET_LEN)
}

/// Parse a user-entered shift string
///
/// Accepts surrounding whitespace and an optional sign. This is the one
/// runtime validation left to perform: the transforms themselves take a
/// proper integer and cannot be handed a malformed shift.
pub fn parse_shift(s: &str) -> Result<i64> {
    s.trim()
        .parse()
        .map_err(|_| CaesarError::InvalidShift(s.to_string()))
}

/// True iff the candidate string can be interpreted as a shift
pub fn is_valid_shift(candidate: &str) -> bool {
    parse_shift(candidate).is_ok()
}
