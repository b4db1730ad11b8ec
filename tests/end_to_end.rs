//! Full rounds through the public API with an offline dictionary

use sequence_puzzle::core::Sequence;
use sequence_puzzle::dictionary::{CandidatePool, LocalLookup};
use sequence_puzzle::game::{
    GUESSES_PER_ROUND, Rejection, Session, StatsStore, SubmitOutcome, ValidityGate,
};
use sequence_puzzle::generator::{RngSource, SequenceGenerator};
use sequence_puzzle::wordlists::WORDS;
use std::time::Duration;

const DICTIONARY: [&str; 5] = ["plain", "link", "nail", "crate", "linen"];

type SeededSession<'a> = Session<'a, RngSource<rand::rngs::StdRng>>;

fn session(pool: &CandidatePool, store: Option<StatsStore>) -> SeededSession<'_> {
    let gate = ValidityGate::new(LocalLookup::new(DICTIONARY));
    let mut session = Session::new(
        SequenceGenerator::new(pool),
        RngSource::seeded(42),
        gate,
        store,
    );
    session.force_sequence(Sequence::parse("LIN").unwrap());
    session
}

#[tokio::test]
async fn scoring_and_rejections() {
    let pool = CandidatePool::build(DICTIONARY);
    let mut session = session(&pool, None);
    let slow = Duration::from_secs(30);

    assert_eq!(
        session.submit_at("plain", slow).await,
        SubmitOutcome::Accepted { length: 5, bonus: 0 }
    );
    assert_eq!(session.round().score(), 5);

    assert_eq!(
        session.submit_at("nail", slow).await,
        SubmitOutcome::Rejected(Rejection::OutOfOrder(Sequence::parse("LIN").unwrap()))
    );
    assert_eq!(session.submit_at("PLAIN", slow).await, SubmitOutcome::AlreadyGuessed);
    assert_eq!(session.submit_at("   ", slow).await, SubmitOutcome::Empty);
    assert_eq!(session.round().remaining(), GUESSES_PER_ROUND - 2);
}

#[tokio::test]
async fn fast_guess_earns_time_bonus() {
    let pool = CandidatePool::build(DICTIONARY);
    let mut session = session(&pool, None);

    session.submit_at("plain", Duration::from_secs(4)).await;
    assert_eq!(session.round().score(), 8);
}

#[tokio::test]
async fn round_persists_to_disk() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("stats.json");
    let pool = CandidatePool::build(DICTIONARY);

    {
        let mut session = session(&pool, Some(StatsStore::new(&path)));
        session.submit_at("linen", Duration::from_secs(20)).await;
        session.submit_at("crate", Duration::from_secs(25)).await;
        session.end_early();
    }

    let state = StatsStore::new(&path).load();
    assert_eq!(state.stats.games_played, 1);
    assert_eq!(state.stats.games_won, 1);
    assert_eq!(state.stats.highest_scores, vec![5]);
    // One rejected guess plus three unused
    assert_eq!(state.stats.mistakes[4], 1);
    assert_eq!(state.last_round.unwrap().words, vec!["linen"]);
}

#[test]
fn revealed_answers_are_shortest_first() {
    let pool = CandidatePool::build(DICTIONARY);
    let answers: Vec<&str> = pool
        .find_example_answers("LIN", 3)
        .into_iter()
        .map(|w| w.text())
        .collect();
    assert_eq!(answers, vec!["LINK", "LINEN", "PLAIN"]);
}

#[test]
fn generated_sequences_are_playable() {
    let pool = CandidatePool::build(WORDS);
    let mut generator = SequenceGenerator::new(&pool);
    let mut rng = RngSource::seeded(7);

    for _ in 0..20 {
        let generation = generator.generate_detailed(&mut rng);
        if !generation.is_fallback() {
            let answers = pool.find_example_answers(generation.sequence.as_str(), 1);
            assert_eq!(answers.len(), 1, "no answer for {}", generation.sequence);
        }
    }
}
