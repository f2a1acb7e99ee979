//! Main solver interface
//!
//! Composes aggregation, matching, and ranking over a shared read-only
//! corpus and frequency table. Solving is a pure function of those plus the
//! history, so one engine can serve any number of concurrent histories.

use crate::constraint::{aggregate, matches};
use crate::core::{GuessFeedback, Word};
use crate::ranking::{PositionFrequencies, rank};
use log::debug;

/// The solver: borrows a corpus and a frequency table, answers histories
pub struct Engine<'a> {
    corpus: &'a [Word],
    frequencies: &'a PositionFrequencies,
}

impl<'a> Engine<'a> {
    /// Create an engine over a corpus and its frequency table
    ///
    /// The corpus is expected to be alphabetically ordered; ranking ties
    /// then resolve alphabetically.
    #[must_use]
    pub const fn new(corpus: &'a [Word], frequencies: &'a PositionFrequencies) -> Self {
        Self {
            corpus,
            frequencies,
        }
    }

    /// The corpus this engine answers from
    #[must_use]
    pub const fn corpus(&self) -> &'a [Word] {
        self.corpus
    }

    /// Feedback history to ranked candidate list
    ///
    /// Aggregates the history into one constraint set, keeps the corpus
    /// words satisfying it, and orders them by expected information gain.
    /// An empty history returns the whole corpus ranked by raw positional
    /// frequency. An empty result means no corpus word is consistent with
    /// the feedback, which is a legitimate terminal state, not an error.
    #[must_use]
    pub fn solve(&self, history: &[GuessFeedback]) -> Vec<&'a Word> {
        let constraints = aggregate(history);

        let survivors: Vec<&Word> = self
            .corpus
            .iter()
            .filter(|word| matches(word, &constraints))
            .collect();
        debug!(
            "{} of {} candidates survive {} guesses",
            survivors.len(),
            self.corpus.len(),
            history.len()
        );

        rank(survivors, &constraints, self.frequencies)
    }

    /// How many corpus words remain consistent with the history
    #[must_use]
    pub fn count_candidates(&self, history: &[GuessFeedback]) -> usize {
        let constraints = aggregate(history);
        self.corpus
            .iter()
            .filter(|word| matches(word, &constraints))
            .count()
    }
}
