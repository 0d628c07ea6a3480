//! Wordle Optimal
//!
//! Exact expected-value search for the best Wordle guess over a set of
//! equally likely solutions.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_optimal::matrix::{MemoryStore, PatternMatrix};
//! use wordle_optimal::solver::SearchEngine;
//! use wordle_optimal::vocabulary::{Vocabulary, loader::words_from_slice};
//!
//! let vocab = Vocabulary::new(
//!     words_from_slice(&["BATCH", "CATCH", "HATCH", "LATCH"]),
//!     words_from_slice(&["CLIMB"]),
//! )
//! .unwrap();
//! let (matrix, _) = PatternMatrix::build(&vocab, &MemoryStore::default());
//!
//! let optimal = SearchEngine::new(&matrix).optimal(&[0, 1, 2, 3]);
//! assert_eq!(vocab.texts(optimal.guesses()), ["CLIMB"]);
//! assert_eq!(optimal.value(), 2.0);
//! ```

// Core domain types
pub mod core;

// Word lists and indexing
pub mod vocabulary;

// Precomputed feedback table
pub mod matrix;

// Search engine and worker pool
pub mod solver;

// Runtime settings
pub mod config;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
