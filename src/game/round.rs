//! Round state
//!
//! A round is one sequence and up to [`GUESSES_PER_ROUND`] submissions. The
//! caller owns the clock and passes the elapsed time with each guess.

use super::validity::{Rejection, ValidityGate, Verdict};
use crate::core::Sequence;
use std::time::Duration;

pub const GUESSES_PER_ROUND: usize = 5;

/// Guesses at or under this elapsed time earn [`TIME_BONUS`]
pub const TIME_BONUS_THRESHOLD: Duration = Duration::from_secs(10);

pub const TIME_BONUS: usize = 3;

/// One submitted (or unused) guess slot
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Guess {
    /// Lowercase text as submitted, or "unused"
    pub text: String,
    /// Letter count; `None` for invalid and unused slots
    pub length: Option<usize>,
    pub bonus: usize,
    pub valid: bool,
}

impl Guess {
    fn accepted(text: String, bonus: usize) -> Self {
        let length = Some(text.chars().count());
        Self {
            text,
            length,
            bonus,
            valid: true,
        }
    }

    fn rejected(text: String) -> Self {
        Self {
            text,
            length: None,
            bonus: 0,
            valid: false,
        }
    }

    /// Placeholder for a slot left when the round ends early
    #[must_use]
    pub fn unused() -> Self {
        Self::rejected("unused".to_string())
    }

    /// Points this guess contributes
    #[must_use]
    pub fn points(&self) -> usize {
        self.length.map_or(0, |len| len + self.bonus)
    }
}

/// Result of submitting a word
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The word counted
    Accepted { length: usize, bonus: usize },
    /// The word was refused and the guess was spent
    Rejected(Rejection),
    /// The word was already tried this round; nothing spent
    AlreadyGuessed,
    /// Blank input; nothing spent
    Empty,
    /// No guesses left
    RoundOver,
}

impl SubmitOutcome {
    /// True if a guess slot was spent
    #[must_use]
    pub const fn consumed_guess(&self) -> bool {
        matches!(self, Self::Accepted { .. } | Self::Rejected(_))
    }
}

/// End-of-round figures fed into the statistics
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundSummary {
    pub score: usize,
    /// Invalid guesses plus unused slots
    pub mistakes: usize,
    /// Valid words in the order they were guessed
    pub valid_words: Vec<String>,
}

/// State of a single round
#[derive(Debug, Clone)]
pub struct Round {
    sequence: Sequence,
    guesses: Vec<Guess>,
    score: usize,
    ended_early: bool,
}

impl Round {
    #[must_use]
    pub const fn new(sequence: Sequence) -> Self {
        Self {
            sequence,
            guesses: Vec::new(),
            score: 0,
            ended_early: false,
        }
    }

    #[must_use]
    pub const fn sequence(&self) -> Sequence {
        self.sequence
    }

    #[must_use]
    pub fn guesses(&self) -> &[Guess] {
        &self.guesses
    }

    #[must_use]
    pub const fn score(&self) -> usize {
        self.score
    }

    /// Guess slots still available
    #[must_use]
    pub fn remaining(&self) -> usize {
        GUESSES_PER_ROUND.saturating_sub(self.guesses.len())
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.remaining() == 0
    }

    #[must_use]
    pub const fn ended_early(&self) -> bool {
        self.ended_early
    }

    /// Invalid guesses, unused slots included
    #[must_use]
    pub fn mistakes(&self) -> usize {
        self.guesses.iter().filter(|g| !g.valid).count()
    }

    #[must_use]
    pub fn valid_words(&self) -> Vec<&str> {
        self.guesses
            .iter()
            .filter(|g| g.valid)
            .map(|g| g.text.as_str())
            .collect()
    }

    /// True if `word` was already submitted this round (valid or not)
    #[must_use]
    pub fn already_guessed(&self, word: &str) -> bool {
        let word = word.trim();
        self.guesses
            .iter()
            .any(|g| g.text.eq_ignore_ascii_case(word))
    }

    /// Submit a word `elapsed` after the round started
    ///
    /// The gate is awaited before the next submission can be made, so checks
    /// for one round never overlap.
    pub async fn submit(
        &mut self,
        word: &str,
        elapsed: Duration,
        gate: &ValidityGate,
    ) -> SubmitOutcome {
        if self.is_over() {
            return SubmitOutcome::RoundOver;
        }

        let word = word.trim().to_lowercase();
        if word.is_empty() {
            return SubmitOutcome::Empty;
        }
        if self.already_guessed(&word) {
            return SubmitOutcome::AlreadyGuessed;
        }

        match gate.check(&word, &self.sequence).await {
            Verdict::Valid => {
                let bonus = if elapsed <= TIME_BONUS_THRESHOLD {
                    TIME_BONUS
                } else {
                    0
                };
                let guess = Guess::accepted(word, bonus);
                let length = guess.length.unwrap_or_default();
                self.score += guess.points();
                self.guesses.push(guess);
                SubmitOutcome::Accepted { length, bonus }
            }
            Verdict::Invalid(Rejection::Empty) => SubmitOutcome::Empty,
            Verdict::Invalid(reason) => {
                self.guesses.push(Guess::rejected(word));
                SubmitOutcome::Rejected(reason)
            }
        }
    }

    /// Give up the remaining guesses; each becomes an unused slot
    pub fn end_early(&mut self) {
        let remaining = self.remaining();
        if remaining > 0 {
            self.ended_early = true;
        }
        self.guesses
            .extend(std::iter::repeat_with(Guess::unused).take(remaining));
    }

    /// Figures for the statistics update
    #[must_use]
    pub fn summary(&self) -> RoundSummary {
        RoundSummary {
            score: self.score,
            mistakes: self.mistakes(),
            valid_words: self.valid_words().into_iter().map(str::to_string).collect(),
        }
    }
}
