use crate::error::Result;
use crate::frequency::{analyze_frequency, index_of_coincidence};
use std::cmp::Ordering;

/// Render the letter-frequency distribution of a text
///
/// Text mode sorts by percentage, highest first (ties by letter), and adds
/// the index of coincidence as a hint on how English-like the text is.
/// JSON mode emits the raw letter-to-percentage table.
pub fn frequency_report(text: &str, json: bool) -> Result<String> {
    let table = analyze_frequency(text);

    if json {
        let mut out = serde_json::to_string_pretty(&table)?;
        out.push('\n');
        return Ok(out);
    }

    if table.is_empty() {
        return Ok("No alphabetic characters found in the text.\n".to_string());
    }

    let letters_counted: u64 = text
        .chars()
        .filter(|c| c.is_ascii_alphabetic())
        .count() as u64;

    let mut entries: Vec<(char, f64)> = table.into_iter().collect();
    entries.sort_by(|a, b| {
        b.1.partial_cmp(&a.1)
            .unwrap_or(Ordering::Equal)
            .then(a.0.cmp(&b.0))
    });

    let mut output = String::new();
    output.push_str("Letter Frequency Analysis\n");
    output.push_str("=========================\n\n");
    output.push_str(&format!("Letters counted: {}\n", letters_counted));
    output.push_str(&format!(
        "Index of coincidence: {:.4} (English ≈ 0.067, random ≈ 0.038)\n\n",
        index_of_coincidence(text)
    ));
    for (letter, percentage) in &entries {
        output.push_str(&format!(
            "{}: {:5.1}%\n",
            letter.to_ascii_uppercase(),
            percentage
        ));
    }

    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_sorted_by_percentage() {
        let report = frequency_report("aaabbc", false).unwrap();
        let a_pos = report.find("A: ").unwrap();
        let b_pos = report.find("B: ").unwrap();
        let c_pos = report.find("C: ").unwrap();
        assert!(a_pos < b_pos && b_pos < c_pos);
    }

    #[test]
    fn test_report_counts_and_percentages() {
        let report = frequency_report("aabbcc", false).unwrap();
        assert!(report.contains("Letters counted: 6"));
        assert!(report.contains("A:  33.3%"));
    }

    #[test]
    fn test_letterless_input_message() {
        let report = frequency_report("12345", false).unwrap();
        assert_eq!(report, "No alphabetic characters found in the text.\n");
    }

    #[test]
    fn test_json_report_is_sparse() {
        let report = frequency_report("a1b2c3", true).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&report).unwrap();
        let object = parsed.as_object().unwrap();
        assert_eq!(object.len(), 3);
        assert!((object["a"].as_f64().unwrap() - 100.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_json_report_empty_input() {
        let report = frequency_report("", true).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&report).unwrap();
        assert!(parsed.as_object().unwrap().is_empty());
    }
}
