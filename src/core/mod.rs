//! Core domain types
//!
//! The fundamental types of the engine: validated words and per-tile guess
//! feedback. Everything here is pure and has no knowledge of where feedback
//! comes from or where ranked words go.

mod feedback;
mod word;

/// Length of every word and guess in the game
pub const WORD_LEN: usize = 5;

pub use feedback::{GuessFeedback, TileOutcome, TileStatus};
pub use word::{Word, WordError};
