//! Word list loading utilities
//!
//! Provides functions to load raw word lists from files or the embedded constant.

use std::fs;
use std::io;
use std::path::Path;

/// Load raw words from a file, one per line
///
/// Lines are trimmed; blank lines and `#` comments are skipped. No other
/// validation is done here.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use sequence_puzzle::wordlists::loader::load_from_file;
///
/// let words = load_from_file("/usr/share/dict/words").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<String>> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;
    let words = raw_from_lines(&content);

    tracing::debug!(path = %path.display(), count = words.len(), "loaded word list");
    Ok(words)
}

/// Convert an embedded string slice to owned raw words
///
/// # Examples
/// ```
/// use sequence_puzzle::wordlists::loader::raw_from_slice;
/// use sequence_puzzle::wordlists::WORDS;
///
/// let words = raw_from_slice(WORDS);
/// assert_eq!(words.len(), WORDS.len());
/// ```
#[must_use]
pub fn raw_from_slice(slice: &[&str]) -> Vec<String> {
    slice.iter().map(|&s| s.to_string()).collect()
}

fn raw_from_lines(content: &str) -> Vec<String> {
    content
        .lines()
        .filter_map(|line| {
            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                None
            } else {
                Some(trimmed.to_string())
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn raw_from_slice_keeps_everything() {
        let input = &["plain", "self-made", "ab"];
        let words = raw_from_slice(input);

        assert_eq!(words, vec!["plain", "self-made", "ab"]);
    }

    #[test]
    fn raw_from_slice_empty() {
        let input: &[&str] = &[];
        assert!(raw_from_slice(input).is_empty());
    }

    #[test]
    fn raw_from_lines_skips_blank_and_comments() {
        let words = raw_from_lines("# header\n  plain \n\nlink\r\n");
        assert_eq!(words, vec!["plain", "link"]);
    }

    #[test]
    fn load_from_file_reads_lines() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "crate\nnail\n").unwrap();

        let words = load_from_file(file.path()).unwrap();
        assert_eq!(words, vec!["crate", "nail"]);
    }

    #[test]
    fn load_from_missing_file_errors() {
        assert!(load_from_file("/definitely/not/here.txt").is_err());
    }
}
