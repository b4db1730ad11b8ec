//! Dictionary word representation
//!
//! A Word is an uppercase, alphabetic-only string of at least three letters.

use std::fmt;
use thiserror::Error;

/// Shortest word the puzzle accepts
pub const MIN_WORD_LEN: usize = 3;

/// An uppercase dictionary word
///
/// Stores the normalized text; the bytes are always ASCII uppercase letters.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Word {
    text: String,
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WordError {
    #[error("Word must be at least 3 letters, got {0}")]
    TooShort(usize),
    #[error("Word must contain only ASCII letters")]
    NonAscii,
    #[error("Word contains invalid characters")]
    InvalidCharacters,
}

impl Word {
    /// Create a new Word from a string
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - Length is below three letters
    /// - Contains non-ASCII characters
    /// - Contains non-alphabetic characters
    ///
    /// # Examples
    /// ```
    /// use sequence_puzzle::core::Word;
    ///
    /// let word = Word::new("plain").unwrap();
    /// assert_eq!(word.text(), "PLAIN");
    ///
    /// assert!(Word::new("ab").is_err());
    /// assert!(Word::new("c4t").is_err());
    /// ```
    pub fn new(text: impl Into<String>) -> Result<Self, WordError> {
        let text: String = text.into().to_ascii_uppercase();

        if !text.is_ascii() {
            return Err(WordError::NonAscii);
        }

        if !text.bytes().all(|b| b.is_ascii_uppercase()) {
            return Err(WordError::InvalidCharacters);
        }

        if text.len() < MIN_WORD_LEN {
            return Err(WordError::TooShort(text.len()));
        }

        Ok(Self { text })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the word as uppercase ASCII bytes
    #[inline]
    #[must_use]
    pub fn bytes(&self) -> &[u8] {
        self.text.as_bytes()
    }

    /// Number of letters
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Always false for a constructed word; present for API symmetry
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Check whether the word ends with the given uppercase suffix
    #[inline]
    #[must_use]
    pub fn ends_with(&self, suffix: &str) -> bool {
        self.text.ends_with(suffix)
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

impl AsRef<str> for Word {
    fn as_ref(&self) -> &str {
        &self.text
    }
}
