use crate::error::Result;
use std::io::Read;
use std::path::PathBuf;

/// Resolve the text operand of a subcommand
///
/// A positional argument wins. Otherwise `--file` is read, with a single
/// trailing newline stripped so line-oriented files transform to what the
/// author typed. With neither, stdin is read to EOF, verbatim.
pub fn read_text(text: Option<String>, file: Option<PathBuf>) -> Result<String> {
    match (text, file) {
        (Some(text), _) => Ok(text),
        (None, Some(path)) => {
            let mut contents = std::fs::read_to_string(path)?;
            if contents.ends_with('\n') {
                contents.pop();
                if contents.ends_with('\r') {
                    contents.pop();
                }
            }
            Ok(contents)
        }
        (None, None) => {
            let mut contents = String::new();
            std::io::stdin().read_to_string(&mut contents)?;
            Ok(contents)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_positional_text_wins() {
        let text = read_text(Some("hello".into()), Some("/nonexistent".into())).unwrap();
        assert_eq!(text, "hello");
    }

    #[test]
    fn test_file_input_strips_trailing_newline() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("msg.txt");
        std::fs::write(&path, "attack at dawn\n").unwrap();
        assert_eq!(read_text(None, Some(path)).unwrap(), "attack at dawn");
    }

    #[test]
    fn test_file_input_strips_crlf() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("msg.txt");
        std::fs::write(&path, "attack at dawn\r\n").unwrap();
        assert_eq!(read_text(None, Some(path)).unwrap(), "attack at dawn");
    }

    #[test]
    fn test_file_input_keeps_interior_newlines() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("msg.txt");
        std::fs::write(&path, "line one\nline two\n").unwrap();
        assert_eq!(read_text(None, Some(path)).unwrap(), "line one\nline two");
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("absent.txt");
        assert!(read_text(None, Some(path)).is_err());
    }
}
