use caesar::{analyze_frequency, brute_force, decrypt, encrypt};
use proptest::prelude::*;

proptest! {
    #[test]
    fn roundtrip_for_any_text_and_shift(text in ".*", shift in any::<i64>()) {
        prop_assert_eq!(decrypt(&encrypt(&text, shift), shift), text);
    }

    #[test]
    fn shift_is_periodic_mod_26(text in ".*", shift in -100_000i64..100_000) {
        let base = encrypt(&text, shift);
        prop_assert_eq!(&encrypt(&text, shift + 26), &base);
        prop_assert_eq!(&encrypt(&text, shift - 26), &base);
    }

    #[test]
    fn case_preserved_and_non_letters_untouched(text in ".*", shift in any::<i64>()) {
        let output = encrypt(&text, shift);
        prop_assert_eq!(output.chars().count(), text.chars().count());
        for (before, after) in text.chars().zip(output.chars()) {
            if before.is_ascii_lowercase() {
                prop_assert!(after.is_ascii_lowercase());
            } else if before.is_ascii_uppercase() {
                prop_assert!(after.is_ascii_uppercase());
            } else {
                prop_assert_eq!(before, after);
            }
        }
    }

    #[test]
    fn brute_force_covers_exactly_the_key_space(text in ".*") {
        let candidates = brute_force(&text);
        prop_assert_eq!(candidates.len(), 26);
        for (k, candidate) in candidates.iter().enumerate() {
            prop_assert_eq!(candidate.shift as usize, k);
            prop_assert_eq!(&candidate.plaintext, &decrypt(&text, k as i64));
        }
    }

    #[test]
    fn frequencies_sum_to_100_or_table_is_empty(text in "[a-zA-Z0-9 ,.!?]*") {
        let table = analyze_frequency(&text);
        let letters = text.chars().filter(|c| c.is_ascii_alphabetic()).count();
        if letters == 0 {
            prop_assert!(table.is_empty());
        } else {
            let sum: f64 = table.values().sum();
            prop_assert!((sum - 100.0).abs() < 1e-6, "sum was {}", sum);
        }
    }

    #[test]
    fn frequency_is_case_insensitive(text in ".*") {
        prop_assert_eq!(
            analyze_frequency(&text),
            analyze_frequency(&text.to_ascii_uppercase())
        );
    }
}
