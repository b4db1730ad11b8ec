//! Sequence Puzzle
//!
//! A word game: find words that contain three letters in order. The generator
//! picks letter sequences that enough dictionary words can solve, the validity
//! gate checks guesses, and statistics persist between sessions.
//!
//! # Quick Start
//!
//! ```rust
//! use sequence_puzzle::core::{Sequence, Word};
//!
//! let sequence = Sequence::parse("LIN").unwrap();
//! let word = Word::new("plain").unwrap();
//! assert!(sequence.is_contained_in(word.text()));
//! ```

// Core domain types
pub mod core;

// Embedded and file word lists
pub mod wordlists;

// Candidate pool and word lookups
pub mod dictionary;

// Sequence generation
pub mod generator;

// Rounds, validity and statistics
pub mod game;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;

// Tracing setup
pub mod logging;
