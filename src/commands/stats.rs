//! Stats command

use crate::game::{StatsStore, StoreError, StoredState};

/// Load the stored state, optionally clearing it first
///
/// # Errors
///
/// Returns an error if `clear` is set and the stats file cannot be removed.
pub fn load_stats(store: &StatsStore, clear: bool) -> Result<StoredState, StoreError> {
    if clear {
        store.clear()?;
        tracing::info!(path = %store.path().display(), "stats cleared");
    }
    Ok(store.load())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::RoundSummary;

    #[test]
    fn load_and_clear() {
        let dir = tempfile::tempdir().unwrap();
        let store = StatsStore::new(dir.path().join("stats.json"));

        let mut state = StoredState::default();
        state.finish_round(&RoundSummary {
            score: 9,
            mistakes: 1,
            valid_words: vec!["plain".to_string()],
        });
        store.save(&state).unwrap();

        assert_eq!(load_stats(&store, false).unwrap().stats.games_played, 1);
        assert_eq!(load_stats(&store, true).unwrap(), StoredState::default());
    }
}
