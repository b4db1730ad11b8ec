//! Sequence generation
//!
//! Picks a round's three letters from random dictionary words, keeping only
//! sequences that enough pool words contain.

pub mod cache;
mod engine;
pub mod policy;
pub mod random;

pub use cache::{MemoryCache, SharedCache, SupportCache};
pub use engine::{Generation, Origin, SequenceGenerator, estimate_support, fallback_sequence};
pub use policy::{Difficulty, FORBIDDEN_FINAL_LETTERS, GeneratorPolicy, Tier};
pub use random::{RandomSource, RngSource};
