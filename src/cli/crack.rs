use crate::attack::brute_force;
use crate::error::Result;

/// Render all 26 candidate decryptions of a ciphertext
///
/// Text mode lists one candidate per line; JSON mode emits the candidate
/// array for machine consumption.
pub fn crack_report(ciphertext: &str, json: bool) -> Result<String> {
    let candidates = brute_force(ciphertext);

    if json {
        let mut out = serde_json::to_string_pretty(&candidates)?;
        out.push('\n');
        return Ok(out);
    }

    let mut output = String::new();
    output.push_str("Brute Force Attack\n");
    output.push_str("==================\n\n");
    for candidate in &candidates {
        output.push_str(&format!("Shift {:2}: {}\n", candidate.shift, candidate.plaintext));
    }
    output.push_str("\nLook for readable plaintext above.\n");

    Ok(output)
}
