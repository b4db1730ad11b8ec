//! Game rules: guess validation, round state, statistics and the play session

mod round;
mod session;
mod stats;
mod store;
pub mod validity;

pub use round::{
    GUESSES_PER_ROUND, Guess, Round, RoundSummary, SubmitOutcome, TIME_BONUS,
    TIME_BONUS_THRESHOLD,
};
pub use session::{REVEALED_ANSWERS, Session};
pub use stats::{LongestWord, MISTAKE_BUCKETS, STATS_VERSION, Statistics, TOP_ENTRIES};
pub use store::{LastRound, StatsStore, StoreError, StoredState};
pub use validity::{PROFANITY, Rejection, ValidityGate, Verdict};
