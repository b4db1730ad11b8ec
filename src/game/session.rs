//! Play session
//!
//! Ties the generator, the validity gate and the stats store together for the
//! line and TUI front ends. One round is live at a time.

use super::round::{Round, SubmitOutcome};
use super::stats::Statistics;
use super::store::{LastRound, StatsStore, StoreError, StoredState};
use super::validity::ValidityGate;
use crate::core::{Sequence, Word};
use crate::generator::{Generation, RandomSource, SequenceGenerator};
use std::time::{Duration, Instant};

/// Example answers revealed when a round ends
pub const REVEALED_ANSWERS: usize = 2;

pub struct Session<'a, R: RandomSource> {
    generator: SequenceGenerator<'a>,
    rng: R,
    gate: ValidityGate,
    store: Option<StatsStore>,
    state: StoredState,
    round: Round,
    generation: Generation,
    started: Option<Instant>,
}

impl<'a, R: RandomSource> Session<'a, R> {
    /// Start a session and generate the first round
    ///
    /// Without a store, statistics live only as long as the session.
    pub fn new(
        mut generator: SequenceGenerator<'a>,
        mut rng: R,
        gate: ValidityGate,
        store: Option<StatsStore>,
    ) -> Self {
        let state = store.as_ref().map(StatsStore::load).unwrap_or_default();
        let generation = generator.generate_detailed(&mut rng);

        Self {
            generator,
            rng,
            gate,
            store,
            state,
            round: Round::new(generation.sequence),
            generation,
            started: None,
        }
    }

    /// Replace the generated sequence of a round that has not started
    ///
    /// Used by tests and demos that need a known sequence.
    pub fn force_sequence(&mut self, sequence: Sequence) {
        if self.started.is_none() {
            self.round = Round::new(sequence);
        }
    }

    #[must_use]
    pub const fn round(&self) -> &Round {
        &self.round
    }

    #[must_use]
    pub const fn generation(&self) -> &Generation {
        &self.generation
    }

    #[must_use]
    pub const fn stats(&self) -> &Statistics {
        &self.state.stats
    }

    /// Statistics plus the last-round scratch record
    #[must_use]
    pub const fn state(&self) -> &StoredState {
        &self.state
    }

    #[must_use]
    pub const fn last_round(&self) -> Option<&LastRound> {
        self.state.last_round.as_ref()
    }

    #[must_use]
    pub const fn gate(&self) -> &ValidityGate {
        &self.gate
    }

    #[must_use]
    pub const fn is_started(&self) -> bool {
        self.started.is_some()
    }

    /// Reveal the letters and start the clock
    pub fn begin(&mut self) {
        if self.started.is_none() {
            self.started = Some(Instant::now());
        }
    }

    /// Time since the round began (zero before it begins)
    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.started.map(|t| t.elapsed()).unwrap_or_default()
    }

    /// Submit a guess, finishing the round when the last slot is used
    pub async fn submit(&mut self, word: &str) -> SubmitOutcome {
        self.begin();
        let elapsed = self.elapsed();
        self.submit_at(word, elapsed).await
    }

    /// Submit a guess with an explicit elapsed time
    pub async fn submit_at(&mut self, word: &str, elapsed: Duration) -> SubmitOutcome {
        let outcome = self.round.submit(word, elapsed, &self.gate).await;
        if outcome.consumed_guess() && self.round.is_over() {
            self.finish();
        }
        outcome
    }

    /// Give up the remaining guesses and record the round
    pub fn end_early(&mut self) {
        if self.round.is_over() {
            return;
        }
        self.round.end_early();
        self.finish();
    }

    /// Shortest pool words containing the current sequence
    #[must_use]
    pub fn example_answers(&self, max: usize) -> Vec<&'a Word> {
        self.generator
            .pool()
            .find_example_answers(self.round.sequence().as_str(), max)
    }

    /// Discard the current round and generate a new one
    ///
    /// Abandoning a round that began but did not finish resets the streak.
    pub fn new_round(&mut self) {
        if self.started.is_some() && !self.round.is_over() {
            self.state.stats.abandon_round();
            self.persist();
        }

        self.generation = self.generator.generate_detailed(&mut self.rng);
        self.round = Round::new(self.generation.sequence);
        self.started = None;
    }

    /// Clear all statistics, on disk too
    ///
    /// # Errors
    ///
    /// Returns an error if the stats file exists but cannot be removed.
    pub fn clear_stats(&mut self) -> Result<(), StoreError> {
        self.state = StoredState::default();
        match &self.store {
            Some(store) => store.clear(),
            None => Ok(()),
        }
    }

    fn finish(&mut self) {
        let summary = self.round.summary();
        self.state.finish_round(&summary);
        tracing::info!(
            sequence = %self.round.sequence(),
            score = summary.score,
            mistakes = summary.mistakes,
            "round finished"
        );
        self.persist();
    }

    fn persist(&self) {
        if let Some(store) = &self.store
            && let Err(e) = store.save(&self.state)
        {
            tracing::error!(path = %store.path().display(), error = %e, "failed to save stats");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::CandidatePool;
    use crate::game::validity::tests::CountingLookup;
    use crate::generator::RngSource;

    fn pool() -> CandidatePool {
        CandidatePool::build(["plain", "link", "nail", "crate", "linen"])
    }

    fn new_session(
        pool: &CandidatePool,
        store: Option<StatsStore>,
    ) -> Session<'_, RngSource<rand::rngs::StdRng>> {
        let gate = ValidityGate::new(CountingLookup::knowing(&["plain", "link", "linen"]));
        let mut session = Session::new(
            SequenceGenerator::new(pool),
            RngSource::seeded(8),
            gate,
            store,
        );
        session.force_sequence(Sequence::parse("LIN").unwrap());
        session
    }

    #[tokio::test]
    async fn last_guess_finishes_and_records_round() {
        let pool = pool();
        let mut session = new_session(&pool, None);

        for word in ["plain", "link", "linen", "lqinz", "nail"] {
            session.submit_at(word, Duration::from_secs(20)).await;
        }

        assert!(session.round().is_over());
        assert_eq!(session.stats().games_played, 1);
        assert_eq!(session.stats().games_won, 1);
        assert_eq!(session.stats().mistakes[2], 1);
        let last = session.last_round().unwrap();
        assert_eq!(last.score, 14);
        assert_eq!(last.words, vec!["plain", "link", "linen"]);
    }

    #[tokio::test]
    async fn end_early_records_unused_as_mistakes() {
        let pool = pool();
        let mut session = new_session(&pool, None);

        session.submit("plain").await;
        session.end_early();
        session.end_early();

        assert_eq!(session.stats().games_played, 1);
        assert_eq!(session.stats().mistakes[4], 1);
        assert_eq!(session.stats().highest_scores, vec![8]);
    }

    #[tokio::test]
    async fn abandoning_a_started_round_resets_streak() {
        let pool = pool();
        let mut session = new_session(&pool, None);

        session.submit("plain").await;
        session.end_early();
        assert_eq!(session.stats().current_streak, 1);

        session.new_round();
        session.force_sequence(Sequence::parse("LIN").unwrap());
        session.submit("plain").await;
        session.new_round();

        assert_eq!(session.stats().current_streak, 0);
        assert_eq!(session.stats().max_streak, 1);
        assert_eq!(session.stats().games_played, 1);
    }

    #[test]
    fn unstarted_round_can_be_skipped_freely() {
        let pool = pool();
        let mut session = new_session(&pool, None);
        session.new_round();
        assert!(!session.is_started());
        assert_eq!(session.stats(), &Statistics::default());
    }

    #[tokio::test]
    async fn stats_persist_through_store() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("stats.json");
        let pool = pool();

        {
            let mut session = new_session(&pool, Some(StatsStore::new(&path)));
            session.submit("plain").await;
            session.end_early();
        }

        let session = new_session(&pool, Some(StatsStore::new(&path)));
        assert_eq!(session.stats().games_played, 1);
        assert!(session.last_round().is_some());
    }

    #[tokio::test]
    async fn clear_stats_resets_memory_and_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("stats.json");
        let pool = pool();

        let mut session = new_session(&pool, Some(StatsStore::new(&path)));
        session.submit("plain").await;
        session.end_early();
        assert!(path.exists());

        session.clear_stats().unwrap();
        assert_eq!(session.state(), &StoredState::default());
        assert!(!path.exists());

        // Clearing again with nothing on disk is fine
        session.clear_stats().unwrap();
        let reloaded = new_session(&pool, Some(StatsStore::new(&path)));
        assert_eq!(reloaded.stats().games_played, 0);
        assert!(reloaded.last_round().is_none());
    }

    #[test]
    fn example_answers_use_current_sequence() {
        let pool = pool();
        let session = new_session(&pool, None);
        let answers: Vec<&str> = session
            .example_answers(REVEALED_ANSWERS)
            .into_iter()
            .map(Word::text)
            .collect();
        assert_eq!(answers, vec!["LINK", "LINEN"]);
    }
}
