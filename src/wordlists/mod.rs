//! Dictionary sources
//!
//! Provides the embedded word list compiled into the binary and a loader for
//! user-supplied lists. Entries here are raw: filtering happens when the
//! candidate pool is built.

mod embedded;
pub mod loader;

pub use embedded::{WORDS, WORDS_COUNT};
