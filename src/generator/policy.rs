//! Difficulty tiers and generation policy
//!
//! The tier split, thresholds and forbidden letters were tuned by playtesting.
//! They are fixed per generator but kept as plain data so they can be tweaked.

use super::random::RandomSource;
use std::fmt;

/// Letters a generated sequence may not end with
pub const FORBIDDEN_FINAL_LETTERS: &[u8] = b"SGD";

/// Difficulty of a generated round
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Difficulty {
    /// Long source words, sparse support
    Hard,
    /// Short source words, denser support
    Easy,
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Hard => write!(f, "hard"),
            Self::Easy => write!(f, "easy"),
        }
    }
}

/// Sampling constraints for one difficulty
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tier {
    pub difficulty: Difficulty,
    /// A sequence is accepted once this many sampled words contain it
    pub min_support: usize,
    /// Source words are drawn only from words at least this long
    pub min_word_len: usize,
}

impl Tier {
    pub const HARD: Self = Self {
        difficulty: Difficulty::Hard,
        min_support: 3,
        min_word_len: 8,
    };

    pub const EASY: Self = Self {
        difficulty: Difficulty::Easy,
        min_support: 5,
        min_word_len: 4,
    };
}

/// Full generation policy
#[derive(Debug, Clone)]
pub struct GeneratorPolicy {
    /// Probability of choosing the hard tier (default: 0.75)
    pub hard_probability: f64,

    pub hard: Tier,

    pub easy: Tier,

    /// Sampling attempts before falling back (default: 1000)
    pub max_attempts: usize,

    /// Draws per support estimate when the tier pool is larger (default: 10,000)
    pub sample_size: usize,

    /// Uppercase letters a sequence may not end with (default: S, G, D)
    pub forbidden_final: Vec<u8>,
}

impl Default for GeneratorPolicy {
    fn default() -> Self {
        Self {
            hard_probability: 0.75,
            hard: Tier::HARD,
            easy: Tier::EASY,
            max_attempts: 1000,
            sample_size: 10_000,
            forbidden_final: FORBIDDEN_FINAL_LETTERS.to_vec(),
        }
    }
}

impl GeneratorPolicy {
    /// Draw a tier: hard with `hard_probability`, otherwise easy
    pub fn choose_tier<R: RandomSource + ?Sized>(&self, rng: &mut R) -> Tier {
        if rng.unit() < self.hard_probability {
            self.hard
        } else {
            self.easy
        }
    }

    /// Tier for a difficulty
    #[must_use]
    pub const fn tier(&self, difficulty: Difficulty) -> Tier {
        match difficulty {
            Difficulty::Hard => self.hard,
            Difficulty::Easy => self.easy,
        }
    }

    /// True if `letter` may not end a sequence
    #[must_use]
    pub fn is_forbidden_final(&self, letter: u8) -> bool {
        self.forbidden_final
            .iter()
            .any(|f| f.eq_ignore_ascii_case(&letter))
    }
}
