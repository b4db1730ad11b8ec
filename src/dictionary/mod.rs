//! Dictionary index and word-validity lookups
//!
//! The candidate pool is built once from a raw word source and never mutated.
//! Lookups answer "is this a real English word" for the validity gate.

pub mod lookup;
mod pool;

pub use lookup::{DictionaryApiLookup, LocalLookup, LookupError, WordLookup};
pub use pool::{CandidatePool, EXCLUDED_SUFFIXES, PoolPolicy};
