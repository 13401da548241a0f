use crate::alphabet::{letter_index, Case};
use std::collections::BTreeMap;

/// Count case-folded letter occurrences
/// Returns the per-letter counts and the total number of letters seen
fn letter_counts(text: &str) -> (BTreeMap<char, u64>, u64) {
    let mut counts = BTreeMap::new();
    let mut total = 0u64;
    for c in text.chars() {
        let folded = c.to_ascii_lowercase();
        if let Some((Case::Lower, _)) = letter_index(folded) {
            *counts.entry(folded).or_insert(0) += 1;
            total += 1;
        }
    }
    (counts, total)
}

/// Relative frequency of each letter in a text, as percentages
///
/// Counting is case-folded, so 'A' and 'a' share a bucket, and only the 26
/// Latin letters participate: digits, punctuation, whitespace, and
/// non-Latin characters contribute nothing to the total. The table is
/// sparse: letters that never occur have no entry. Values sum to 100 when
/// the table is non-empty; a text with no letters yields an empty table.
pub fn analyze_frequency(text: &str) -> BTreeMap<char, f64> {
    let (counts, total) = letter_counts(text);
    counts
        .into_iter()
        .map(|(letter, count)| (letter, count as f64 / total as f64 * 100.0))
        .collect()
}

/// Index of coincidence over the case-folded letters of a text
///
/// Probability that two letters drawn at random from the text are equal:
/// sum of n_i*(n_i-1) over N*(N-1). Around 0.067 for English prose and
/// 0.038 (1/26) for uniformly random letters, which makes it a quick check
/// on whether a brute-force candidate is worth reading. Texts with fewer
/// than two letters score 0.
pub fn index_of_coincidence(text: &str) -> f64 {
    let (counts, total) = letter_counts(text);
    if total < 2 {
        return 0.0;
    }
    let coincidences: u64 = counts.values().map(|&n| n * (n - 1)).sum();
    coincidences as f64 / (total * (total - 1)) as f64
}
