use crate::alphabet::ALPHABET_LEN;
use crate::cipher::decrypt;
use serde::Serialize;

/// One possible decryption of a ciphertext
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Candidate {
    /// Shift that was tried, always in 0..26
    pub shift: u8,
    pub plaintext: String,
}

/// Try every possible shift against a ciphertext
///
/// Returns exactly 26 candidates in ascending shift order, one per key in
/// the cipher's entire key space. No candidate is ranked or discarded:
/// deciding which one reads as plaintext is the caller's job.
pub fn brute_force(ciphertext: &str) -> Vec<Candidate> {
    (0..ALPHABET_LEN)
        .map(|shift| Candidate {
            shift,
            plaintext: decrypt(ciphertext, shift as i64),
        })
        .collect()
}
