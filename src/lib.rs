//! Caesar - Shift Cipher Toolkit
//!
//! A classical Caesar cipher over the Latin alphabet, together with the two
//! standard ways of breaking it. Letters rotate within their own case and
//! everything else passes through untouched, so the transform is trivially
//! reversible and deliberately insecure; the attack tools are the point.
//!
//! ## Operations
//!
//! ```text
//! encrypt ─┐
//!          ├─ rotate letters by a normalized shift in 0..26
//! decrypt ─┘
//! brute_force ─ try all 26 shifts, report every candidate
//! analyze_frequency ─ letter distribution as percentages
//! ```
//!
//! Every operation is a pure function: inputs are borrowed, outputs are
//! freshly built, and nothing is shared or mutated, so calls are safe from
//! any number of threads.
//!
//! ## Example
//!
//! ```
//! use caesar::{decrypt, encrypt, brute_force};
//!
//! let secret = encrypt("Hello, World!", 3);
//! assert_eq!(secret, "Khoor, Zruog!");
//! assert_eq!(decrypt(&secret, 3), "Hello, World!");
//!
//! // Without the key, trying all 26 takes no time at all
//! let candidates = brute_force(&secret);
//! assert_eq!(candidates[3].plaintext, "Hello, World!");
//! ```

pub mod alphabet;
pub mod attack;
pub mod cipher;
pub mod cli;
pub mod error;
pub mod frequency;

pub use attack::{brute_force, Candidate};
pub use cipher::{decrypt, encrypt, is_valid_shift, normalize_shift, parse_shift};
pub use error::{CaesarError, Result};
pub use frequency::{analyze_frequency, index_of_coincidence};
