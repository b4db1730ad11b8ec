//! Target letter sequence and the subsequence checker
//!
//! A round's target is three uppercase letters that a guess must contain in
//! order, with any number of letters in between.

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Number of letters in a sequence
pub const SEQUENCE_LEN: usize = 3;

/// Three ordered uppercase letters
///
/// Letters need not be distinct. Ordering and hashing follow the literal text,
/// so a sequence is a cheap map key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Sequence {
    letters: [u8; SEQUENCE_LEN],
}

/// Error type for text that is not a valid sequence
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SequenceError {
    #[error("Sequence must be exactly 3 letters, got {0}")]
    InvalidLength(usize),
    #[error("Sequence must contain only ASCII letters")]
    InvalidCharacters,
}

impl Sequence {
    /// Build a sequence from three letters
    ///
    /// Returns `None` if any byte is not an ASCII letter. Lowercase input is
    /// normalized.
    #[must_use]
    pub fn from_letters(letters: [u8; SEQUENCE_LEN]) -> Option<Self> {
        if !letters.iter().all(u8::is_ascii_alphabetic) {
            return None;
        }
        Some(Self {
            letters: letters.map(|b| b.to_ascii_uppercase()),
        })
    }

    /// Parse a sequence, case-insensitively
    ///
    /// # Examples
    /// ```
    /// use sequence_puzzle::core::Sequence;
    ///
    /// assert_eq!(Sequence::parse("lin").unwrap().as_str(), "LIN");
    /// assert!(Sequence::parse("LINK").is_none());
    /// assert!(Sequence::parse("L1N").is_none());
    /// ```
    #[must_use]
    pub fn parse(text: &str) -> Option<Self> {
        text.parse().ok()
    }

    /// The three uppercase letters
    #[inline]
    #[must_use]
    pub const fn letters(&self) -> [u8; SEQUENCE_LEN] {
        self.letters
    }

    /// Final letter of the sequence
    #[inline]
    #[must_use]
    pub const fn last(&self) -> u8 {
        self.letters[SEQUENCE_LEN - 1]
    }

    /// The sequence as text
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        // Letters are validated ASCII on construction
        std::str::from_utf8(&self.letters).unwrap_or_default()
    }

    /// True if `word` contains the letters in order (not necessarily adjacent)
    #[inline]
    #[must_use]
    pub fn is_contained_in(&self, word: &str) -> bool {
        is_sequential(word, self.as_str())
    }

    /// True if `word` spells out the sequence as a contiguous run of letters
    #[must_use]
    pub fn is_substring_of(&self, word: &str) -> bool {
        word.as_bytes()
            .windows(SEQUENCE_LEN)
            .any(|window| window.eq_ignore_ascii_case(&self.letters))
    }
}

impl FromStr for Sequence {
    type Err = SequenceError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let bytes = text.as_bytes();
        let letters: [u8; SEQUENCE_LEN] = bytes
            .try_into()
            .map_err(|_| SequenceError::InvalidLength(text.chars().count()))?;
        Self::from_letters(letters).ok_or(SequenceError::InvalidCharacters)
    }
}

impl fmt::Display for Sequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Check whether `word` contains `sequence` as a subsequence
///
/// Case-insensitive single pass: each character of `word` that matches the
/// next pending letter of `sequence` advances the pointer. Greedy
/// earliest-match is sufficient for subsequence containment, so there is no
/// backtracking. An empty `sequence` is trivially contained.
///
/// # Examples
/// ```
/// use sequence_puzzle::core::is_sequential;
///
/// assert!(is_sequential("PLAIN", "LIN"));
/// assert!(is_sequential("link", "LIN"));
/// assert!(!is_sequential("NAIL", "LIN"));
/// ```
#[must_use]
pub fn is_sequential(word: &str, sequence: &str) -> bool {
    let mut pending = sequence.chars().map(|c| c.to_ascii_uppercase()).peekable();

    for c in word.chars().map(|c| c.to_ascii_uppercase()) {
        match pending.peek() {
            None => break,
            Some(&next) if next == c => {
                pending.next();
            }
            Some(_) => {}
        }
    }

    pending.peek().is_none()
}
