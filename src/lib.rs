//! Solvle
//!
//! Constraint-solving and candidate-ranking engine for a Wordle-style
//! assistant: accumulated tile feedback in, ranked list of still-possible
//! words out.
//!
//! # Quick Start
//!
//! ```rust
//! use solvle::core::{GuessFeedback, Word};
//! use solvle::ranking::PositionFrequencies;
//! use solvle::solver::Engine;
//! use solvle::wordlists::{ANSWERS, loader::words_from_slice};
//!
//! let corpus = words_from_slice(ANSWERS);
//! let engine = Engine::new(&corpus, PositionFrequencies::embedded());
//!
//! let guess = Word::new("crane").unwrap();
//! let feedback = GuessFeedback::from_marks(&guess, "--G-Y").unwrap();
//!
//! let candidates = engine.solve(&[feedback]);
//! assert!(candidates.iter().all(|w| w.letter_at(2) == b'a'));
//! ```

// Core domain types
pub mod core;

// Constraint aggregation and matching
pub mod constraint;

// Candidate ranking
pub mod ranking;

// Solver facade
pub mod solver;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
