//! Validity gate
//!
//! Cheap local checks run first and short-circuit; only a word that passes all
//! of them is sent to the [`WordLookup`].

use crate::core::Sequence;
use crate::dictionary::WordLookup;
use std::fmt;

/// Words refused outright, compared exactly and ignoring case
pub const PROFANITY: &[&str] = &[
    "fuck", "shit", "bitch", "ass", "damn", "hell", "crap", "piss", "cock", "dick", "pussy",
    "cunt", "fucking", "shitting", "bitching", "asshole", "damned", "hellish", "crappy",
    "pissing", "fucker", "shitty", "bitchy", "asshat", "damnit", "hellfire", "crapper", "pisser",
    "motherfucker", "bullshit", "horseshit", "dumbass", "jackass", "smartass", "badass", "fuckin",
    "bitchin", "asswipe", "pissy",
];

/// Why a submitted word was refused
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    Empty,
    Hyphenated,
    Profane,
    /// The word does not contain the round's letters in order
    OutOfOrder(Sequence),
    /// The lookup did not recognize the word (or failed)
    NotAWord,
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Please enter a word"),
            Self::Hyphenated => write!(f, "Hyphenated words are not allowed"),
            Self::Profane => write!(f, "That word is not allowed"),
            Self::OutOfOrder(sequence) => write!(f, "Word must contain '{sequence}' in order"),
            Self::NotAWord => write!(f, "Not a valid English word"),
        }
    }
}

/// Outcome of a validity check
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Valid,
    Invalid(Rejection),
}

impl Verdict {
    #[must_use]
    pub const fn is_valid(&self) -> bool {
        matches!(self, Self::Valid)
    }
}

/// Decides whether a guess counts for the round
pub struct ValidityGate {
    lookup: Box<dyn WordLookup>,
    denylist: Vec<String>,
}

impl ValidityGate {
    /// Create a gate with the default profanity denylist
    pub fn new(lookup: impl WordLookup + 'static) -> Self {
        Self::with_denylist(lookup, PROFANITY.iter().map(|w| (*w).to_string()))
    }

    /// Create a gate with a custom denylist
    pub fn with_denylist<I>(lookup: impl WordLookup + 'static, denylist: I) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        Self {
            lookup: Box::new(lookup),
            denylist: denylist.into_iter().collect(),
        }
    }

    /// Name of the underlying lookup
    #[must_use]
    pub fn lookup_name(&self) -> &str {
        self.lookup.name()
    }

    #[must_use]
    pub fn is_profane(&self, word: &str) -> bool {
        self.denylist.iter().any(|d| d.eq_ignore_ascii_case(word))
    }

    /// Check `word` against the round's `sequence`
    ///
    /// Never fails: lookup errors are logged and count as "not a word".
    pub async fn check(&self, word: &str, sequence: &Sequence) -> Verdict {
        let word = word.trim();

        if word.is_empty() {
            return Verdict::Invalid(Rejection::Empty);
        }
        if word.contains('-') {
            return Verdict::Invalid(Rejection::Hyphenated);
        }
        if self.is_profane(word) {
            return Verdict::Invalid(Rejection::Profane);
        }
        if !sequence.is_contained_in(word) {
            return Verdict::Invalid(Rejection::OutOfOrder(*sequence));
        }

        match self.lookup.lookup(word).await {
            Ok(true) => Verdict::Valid,
            Ok(false) => Verdict::Invalid(Rejection::NotAWord),
            Err(e) => {
                tracing::warn!(word, lookup = self.lookup.name(), error = %e, "word lookup failed");
                Verdict::Invalid(Rejection::NotAWord)
            }
        }
    }
}
