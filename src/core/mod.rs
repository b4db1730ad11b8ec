//! Core domain types for the sequence puzzle
//!
//! This module contains the fundamental domain types with no I/O and no randomness.
//! All types here are pure, testable, and have clear invariants.

mod sequence;
mod word;

pub use sequence::{SEQUENCE_LEN, Sequence, SequenceError, is_sequential};
pub use word::{MIN_WORD_LEN, Word, WordError};
