use crate::cipher::{decrypt, encrypt, is_valid_shift, parse_shift};
use crate::cli::crack::crack_report;
use crate::cli::freq::frequency_report;
use crate::error::Result;
use std::io::{BufRead, Write};

/// Run the interactive menu on stdin/stdout
pub fn run_stdio() -> Result<()> {
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    run(&mut stdin.lock(), &mut stdout.lock())
}

/// Menu loop over an arbitrary reader/writer pair
///
/// Invalid shift entries re-prompt instead of aborting; EOF on the reader
/// ends the session like an explicit exit.
pub fn run<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> Result<()> {
    writeln!(output, "{}", "=".repeat(50))?;
    writeln!(output, "    Caesar Cipher Tool")?;
    writeln!(output, "{}", "=".repeat(50))?;

    loop {
        writeln!(output)?;
        writeln!(output, "Options:")?;
        writeln!(output, "  1. Encrypt text")?;
        writeln!(output, "  2. Decrypt text")?;
        writeln!(output, "  3. Brute force attack")?;
        writeln!(output, "  4. Frequency analysis")?;
        writeln!(output, "  5. Exit")?;
        writeln!(output)?;

        let choice = match prompt(input, output, "Enter your choice (1-5): ")? {
            Some(line) => line,
            None => return Ok(()),
        };

        match choice.trim() {
            "1" => {
                if encrypt_flow(input, output)?.is_none() {
                    return Ok(());
                }
            }
            "2" => {
                if decrypt_flow(input, output)?.is_none() {
                    return Ok(());
                }
            }
            "3" => {
                if crack_flow(input, output)?.is_none() {
                    return Ok(());
                }
            }
            "4" => {
                if freq_flow(input, output)?.is_none() {
                    return Ok(());
                }
            }
            "5" => {
                writeln!(output, "Thank you for using the Caesar cipher tool!")?;
                return Ok(());
            }
            _ => writeln!(output, "Invalid choice. Please enter 1-5.")?,
        }
    }
}

fn encrypt_flow<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> Result<Option<()>> {
    let Some(text) = prompt(input, output, "Enter text to encrypt: ")? else {
        return Ok(None);
    };
    let Some(shift) = prompt_shift(input, output)? else {
        return Ok(None);
    };
    writeln!(output)?;
    writeln!(output, "Original:  {}", text)?;
    writeln!(output, "Encrypted: {}", encrypt(&text, shift))?;
    Ok(Some(()))
}

fn decrypt_flow<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> Result<Option<()>> {
    let Some(text) = prompt(input, output, "Enter text to decrypt: ")? else {
        return Ok(None);
    };
    let Some(shift) = prompt_shift(input, output)? else {
        return Ok(None);
    };
    writeln!(output)?;
    writeln!(output, "Ciphertext: {}", text)?;
    writeln!(output, "Decrypted:  {}", decrypt(&text, shift))?;
    Ok(Some(()))
}

fn crack_flow<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> Result<Option<()>> {
    let Some(text) = prompt(input, output, "Enter ciphertext to attack: ")? else {
        return Ok(None);
    };
    writeln!(output)?;
    write!(output, "{}", crack_report(&text, false)?)?;
    Ok(Some(()))
}

fn freq_flow<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> Result<Option<()>> {
    let Some(text) = prompt(input, output, "Enter text for frequency analysis: ")? else {
        return Ok(None);
    };
    writeln!(output)?;
    write!(output, "{}", frequency_report(&text, false)?)?;
    Ok(Some(()))
}

/// Print a prompt and read one line, without its line terminator
/// None means the reader hit EOF
fn prompt<R: BufRead, W: Write>(input: &mut R, output: &mut W, message: &str) -> Result<Option<String>> {
    write!(output, "{}", message)?;
    output.flush()?;
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    while line.ends_with('\n') || line.ends_with('\r') {
        line.pop();
    }
    Ok(Some(line))
}

/// Keep asking until the entered shift parses as an integer
fn prompt_shift<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> Result<Option<i64>> {
    loop {
        let Some(line) = prompt(input, output, "Enter shift value: ")? else {
            return Ok(None);
        };
        if is_valid_shift(&line) {
            return Ok(Some(parse_shift(&line)?));
        }
        writeln!(output, "Invalid shift value. Please enter a number.")?;
    }
}
