//! Statistics persistence
//!
//! The whole state is one JSON document, replaced atomically on every save.

use super::round::RoundSummary;
use super::stats::Statistics;
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::io::{self, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("stats file I/O failed: {0}")]
    Io(#[from] io::Error),
    #[error("stats file could not be encoded: {0}")]
    Json(#[from] serde_json::Error),
    #[error("could not replace stats file: {0}")]
    Persist(#[from] tempfile::PersistError),
}

/// Scratch copy of the most recent round, used to highlight new entries
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LastRound {
    pub score: usize,
    pub mistakes: usize,
    pub words: Vec<String>,
}

impl From<&RoundSummary> for LastRound {
    fn from(summary: &RoundSummary) -> Self {
        Self {
            score: summary.score,
            mistakes: summary.mistakes,
            words: summary.valid_words.clone(),
        }
    }
}

/// Everything written to disk
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoredState {
    pub stats: Statistics,
    pub last_round: Option<LastRound>,
}

impl StoredState {
    /// Record a finished round and remember it as the last round
    pub fn finish_round(&mut self, summary: &RoundSummary) {
        self.stats.record_round(summary);
        self.last_round = Some(LastRound::from(summary));
    }
}

/// JSON file holding the [`StoredState`]
#[derive(Debug, Clone)]
pub struct StatsStore {
    path: PathBuf,
}

impl StatsStore {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// `<data dir>/sequence-puzzle/stats.json`, or the working directory if
    /// the platform has no data dir
    #[must_use]
    pub fn default_path() -> PathBuf {
        dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("sequence-puzzle")
            .join("stats.json")
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the stored state
    ///
    /// A missing file gives defaults. An unreadable or corrupt file is logged
    /// and also gives defaults; the next save overwrites it.
    #[must_use]
    pub fn load(&self) -> StoredState {
        match self.try_load() {
            Ok(Some(state)) => state,
            Ok(None) => StoredState::default(),
            Err(e) => {
                tracing::warn!(
                    path = %self.path.display(),
                    error = %e,
                    "ignoring unreadable stats file"
                );
                StoredState::default()
            }
        }
    }

    fn try_load(&self) -> Result<Option<StoredState>, StoreError> {
        let file = match File::open(&self.path) {
            Ok(file) => file,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };
        let state = serde_json::from_reader(BufReader::new(file))?;
        Ok(Some(state))
    }

    /// Write the state, replacing the previous file atomically
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be created or the file cannot
    /// be written or moved into place.
    pub fn save(&self, state: &StoredState) -> Result<(), StoreError> {
        let parent = self
            .path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."));
        fs::create_dir_all(parent)?;

        let temp = NamedTempFile::new_in(parent)?;
        {
            let mut writer = BufWriter::new(&temp);
            serde_json::to_writer_pretty(&mut writer, state)?;
            writer.flush()?;
        }
        temp.persist(&self.path)?;

        tracing::debug!(path = %self.path.display(), "stats saved");
        Ok(())
    }

    /// Delete the stats file if it exists
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be removed.
    pub fn clear(&self) -> Result<(), StoreError> {
        match fs::remove_file(&self.path) {
            Err(e) if e.kind() != io::ErrorKind::NotFound => Err(e.into()),
            _ => Ok(()),
        }
    }
}
