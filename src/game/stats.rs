//! Persistent round statistics

use super::round::RoundSummary;
use serde::{Deserialize, Serialize};

/// Current record layout
pub const STATS_VERSION: u32 = 1;

/// Entries kept in the top-score and longest-word lists
pub const TOP_ENTRIES: usize = 5;

/// Histogram buckets for 0..=5 mistakes
pub const MISTAKE_BUCKETS: usize = 6;

/// A remembered long word
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LongestWord {
    pub word: String,
    pub length: usize,
}

/// Aggregate statistics across rounds
///
/// Every field defaults on read, so records written by older versions (or
/// missing fields) load cleanly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Statistics {
    pub version: u32,
    pub games_played: u32,
    pub games_won: u32,
    pub current_streak: u32,
    pub max_streak: u32,
    /// Highest round scores, descending
    pub highest_scores: Vec<usize>,
    /// Rounds by number of mistakes
    pub mistakes: [u32; MISTAKE_BUCKETS],
    /// Longest distinct valid words, length descending, newest first on ties
    pub longest_words: Vec<LongestWord>,
}

impl Default for Statistics {
    fn default() -> Self {
        Self {
            version: STATS_VERSION,
            games_played: 0,
            games_won: 0,
            current_streak: 0,
            max_streak: 0,
            highest_scores: Vec::new(),
            mistakes: [0; MISTAKE_BUCKETS],
            longest_words: Vec::new(),
        }
    }
}

impl Statistics {
    /// Apply a finished round
    pub fn record_round(&mut self, round: &RoundSummary) {
        self.version = STATS_VERSION;
        self.games_played += 1;

        if round.valid_words.is_empty() {
            self.current_streak = 0;
        } else {
            self.games_won += 1;
            self.current_streak += 1;
            self.max_streak = self.max_streak.max(self.current_streak);
        }

        if round.score > 0 {
            self.highest_scores.push(round.score);
            self.highest_scores.sort_unstable_by(|a, b| b.cmp(a));
            self.highest_scores.truncate(TOP_ENTRIES);
        }

        if let Some(bucket) = self.mistakes.get_mut(round.mistakes) {
            *bucket += 1;
        }

        self.merge_longest_words(&round.valid_words);
    }

    /// A started round was abandoned before it finished
    pub const fn abandon_round(&mut self) {
        self.current_streak = 0;
    }

    /// Fraction of rounds with at least one valid word
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.games_played == 0 {
            0.0
        } else {
            f64::from(self.games_won) / f64::from(self.games_played)
        }
    }

    fn merge_longest_words(&mut self, words: &[String]) {
        // Later guesses are newer, and this round is newer than anything stored
        let mut merged: Vec<LongestWord> =
            Vec::with_capacity(self.longest_words.len() + words.len());
        for word in words.iter().rev() {
            let seen = merged.iter().chain(&self.longest_words).any(|w| w.word == *word);
            if !seen {
                merged.push(LongestWord {
                    word: word.clone(),
                    length: word.chars().count(),
                });
            }
        }
        merged.append(&mut self.longest_words);

        // Stable, so ties keep newest first
        merged.sort_by(|a, b| b.length.cmp(&a.length));
        merged.truncate(TOP_ENTRIES);
        self.longest_words = merged;
    }
}
